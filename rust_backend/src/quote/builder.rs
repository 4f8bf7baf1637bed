//! Multi-room project quotes.
//!
//! The quote wizard prices doors with a simplified per-square-foot model
//! rather than the tier tables: customers sketch a whole project before
//! anyone measures, so the numbers here are estimates the sales team
//! refines later.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PricingError, PricingResult};
use crate::models::{DoorType, SQ_IN_PER_SQ_FT};

use super::reference::quote_reference;

/// Ontario HST applied to quote subtotals.
pub const HST_RATE: f64 = 0.13;

/// Days a quote stays valid after issue.
pub const QUOTE_VALID_DAYS: i64 = 30;

const BASE_RATE_PER_SQ_FT: f64 = 25.0;
const EXTRA_PANEL_CHARGE: f64 = 50.0;
const SOFT_CLOSE_PER_PANEL: f64 = 75.0;
const MIRROR_RATE_PER_SQ_FT: f64 = 15.0;

/// One door in a project quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoorSpec {
    pub series: String,
    pub door_type: DoorType,
    pub width_inches: f64,
    pub height_inches: f64,
    pub panel_count: u32,
    pub finish: String,
    pub soft_close: bool,
    pub mirror: bool,
    pub quantity: u32,
}

impl Default for DoorSpec {
    fn default() -> Self {
        Self {
            series: String::new(),
            door_type: DoorType::Bypass,
            width_inches: 72.0,
            height_inches: 80.0,
            panel_count: 2,
            finish: String::new(),
            soft_close: false,
            mirror: false,
            quantity: 1,
        }
    }
}

/// A room and the doors going into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSpec {
    pub room_name: String,
    pub doors: Vec<DoorSpec>,
}

/// One priced line of a project quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteLine {
    pub room_name: String,
    pub series: String,
    pub door_type: DoorType,
    pub unit_price: f64,
    pub quantity: u32,
    pub line_total: f64,
}

/// A complete priced project quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuote {
    pub lines: Vec<QuoteLine>,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    pub room_count: usize,
    pub door_count: usize,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
    pub reference: String,
}

/// Estimated unit price for one door, rounded to cents.
///
/// Square footage at the base rate, scaled by the door-type multiplier,
/// plus panel, soft-close, and mirror add-ons.
pub fn price_door(door: &DoorSpec) -> f64 {
    let sq_ft = door.width_inches * door.height_inches / SQ_IN_PER_SQ_FT;
    let mut price = sq_ft * BASE_RATE_PER_SQ_FT * door.door_type.multiplier();

    price += (door.panel_count as f64 - 2.0) * EXTRA_PANEL_CHARGE;
    if door.soft_close {
        price += SOFT_CLOSE_PER_PANEL * door.panel_count as f64;
    }
    if door.mirror {
        price += sq_ft * MIRROR_RATE_PER_SQ_FT;
    }

    round_cents(price)
}

/// Price a whole project: line totals, subtotal, HST, and metadata.
///
/// Doors with non-positive dimensions or quantity are rejected; missing
/// series or finish selections only surface through [`validate_rooms`],
/// matching the wizard where incomplete steps block navigation but never
/// break the running total.
pub fn price_quote(rooms: &[RoomSpec], issued_on: NaiveDate) -> PricingResult<ProjectQuote> {
    let mut lines = Vec::new();
    let mut door_count = 0usize;

    for room in rooms {
        for door in &room.doors {
            if door.width_inches <= 0.0 || door.height_inches <= 0.0 {
                return Err(PricingError::InvalidDimensions(format!(
                    "door in '{}' has dimensions {} x {}",
                    room.room_name, door.width_inches, door.height_inches
                )));
            }
            if door.quantity == 0 {
                return Err(PricingError::InvalidDimensions(format!(
                    "door in '{}' has zero quantity",
                    room.room_name
                )));
            }

            let unit_price = price_door(door);
            lines.push(QuoteLine {
                room_name: room.room_name.clone(),
                series: door.series.clone(),
                door_type: door.door_type,
                unit_price,
                quantity: door.quantity,
                line_total: round_cents(unit_price * door.quantity as f64),
            });
            door_count += 1;
        }
    }

    let subtotal = round_cents(lines.iter().map(|line| line.line_total).sum());
    let tax = round_cents(subtotal * HST_RATE);
    let total = round_cents(subtotal + tax);

    let reference = quote_reference(&(&lines, subtotal, tax, total));

    Ok(ProjectQuote {
        lines,
        subtotal,
        tax,
        total,
        room_count: rooms.len(),
        door_count,
        issued_on,
        valid_until: issued_on + Duration::days(QUOTE_VALID_DAYS),
        reference,
    })
}

/// Per-door validation messages for the quote wizard.
///
/// Messages use the wizard's `Room N, Door M:` addressing so the UI can
/// point customers at the field to fix.
pub fn validate_rooms(rooms: &[RoomSpec]) -> Vec<String> {
    let mut messages = Vec::new();

    if rooms.is_empty() {
        messages.push("Add at least one room".to_string());
    }

    for (i, room) in rooms.iter().enumerate() {
        if room.room_name.trim().is_empty() {
            messages.push(format!("Room {}: Name is required", i + 1));
        }
        if room.doors.is_empty() {
            messages.push(format!("Room {}: Add at least one door", i + 1));
        }
        for (j, door) in room.doors.iter().enumerate() {
            if door.series.trim().is_empty() {
                messages.push(format!("Room {}, Door {}: Select a series", i + 1, j + 1));
            }
            if door.finish.trim().is_empty() {
                messages.push(format!("Room {}, Door {}: Select a finish", i + 1, j + 1));
            }
            if door.width_inches <= 0.0 {
                messages.push(format!("Room {}, Door {}: Enter valid width", i + 1, j + 1));
            }
            if door.height_inches <= 0.0 {
                messages.push(format!("Room {}, Door {}: Enter valid height", i + 1, j + 1));
            }
            if door.quantity == 0 {
                messages.push(format!(
                    "Room {}, Door {}: Enter valid quantity",
                    i + 1,
                    j + 1
                ));
            }
        }
    }

    messages
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

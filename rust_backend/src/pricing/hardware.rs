//! Hardware pricing with a named per-item breakdown.

use crate::models::{HardwareLine, HardwareSelection, HardwareTotal};

/// Total hardware charge for a selection, plus the named lines behind it.
///
/// The track contributes only when it is not included with the door;
/// handles, soft-close, and add-ons contribute their full price whenever
/// present. The line list renders in the cart, so items are pushed in the
/// order the storefront displays them.
pub fn hardware_price(hardware: &HardwareSelection) -> HardwareTotal {
    let mut breakdown = Vec::new();
    let mut total = 0.0;

    if !hardware.track.included {
        breakdown.push(HardwareLine {
            name: hardware.track.name.clone(),
            price: hardware.track.price,
        });
        total += hardware.track.price;
    }

    if let Some(handles) = &hardware.handles {
        breakdown.push(HardwareLine {
            name: handles.name.clone(),
            price: handles.price,
        });
        total += handles.price;
    }

    if let Some(soft_close) = &hardware.soft_close {
        breakdown.push(HardwareLine {
            name: soft_close.name.clone(),
            price: soft_close.price,
        });
        total += soft_close.price;
    }

    for item in &hardware.additional {
        breakdown.push(HardwareLine {
            name: item.name.clone(),
            price: item.price,
        });
        total += item.price;
    }

    HardwareTotal { total, breakdown }
}

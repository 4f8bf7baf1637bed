//! Volume discounts for multi-door orders.

use crate::models::VolumeDiscount;

/// Tiered volume discount: 3+ doors 5%, 5+ doors 10%, 10+ doors 15%.
///
/// The percentage is returned as a fraction (`0.15` for 15%); dollar
/// amounts round to the nearest dollar.
pub fn volume_discount(quantity: u32, unit_price: f64) -> VolumeDiscount {
    let discount_percentage = if quantity >= 10 {
        0.15
    } else if quantity >= 5 {
        0.10
    } else if quantity >= 3 {
        0.05
    } else {
        0.0
    };

    let quantity = quantity as f64;
    let discount_amount = (unit_price * discount_percentage * quantity).round();
    let final_price = (unit_price * quantity - discount_amount).round();

    VolumeDiscount {
        discount_percentage,
        discount_amount,
        final_price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_orders_get_no_discount() {
        let discount = volume_discount(2, 449.0);
        assert_eq!(discount.discount_percentage, 0.0);
        assert_eq!(discount.discount_amount, 0.0);
        assert_eq!(discount.final_price, 898.0);
    }

    #[test]
    fn three_doors_get_five_percent() {
        let discount = volume_discount(3, 449.0);
        assert_eq!(discount.discount_percentage, 0.05);
        assert_eq!(discount.discount_amount, 67.0);
        assert_eq!(discount.final_price, 1280.0);
    }

    #[test]
    fn five_doors_get_ten_percent() {
        let discount = volume_discount(5, 100.0);
        assert_eq!(discount.discount_percentage, 0.10);
        assert_eq!(discount.discount_amount, 50.0);
        assert_eq!(discount.final_price, 450.0);
    }

    #[test]
    fn ten_doors_get_fifteen_percent() {
        let discount = volume_discount(10, 100.0);
        assert_eq!(discount.discount_percentage, 0.15);
        assert_eq!(discount.discount_amount, 150.0);
        assert_eq!(discount.final_price, 850.0);
    }

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(volume_discount(9, 100.0).discount_percentage, 0.10);
        assert_eq!(volume_discount(10, 100.0).discount_percentage, 0.15);
        assert_eq!(volume_discount(4, 100.0).discount_percentage, 0.05);
    }

    #[test]
    fn zero_quantity_is_a_zero_order() {
        let discount = volume_discount(0, 449.0);
        assert_eq!(discount.discount_amount, 0.0);
        assert_eq!(discount.final_price, 0.0);
    }
}

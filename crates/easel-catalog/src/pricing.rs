//! Sale price calculation.

/// Calculate the sale price for a base price and a discount expressed
/// in percentage points (20 means 20% off).
///
/// A zero or negative discount leaves the price unchanged; callers must
/// never see 0 as the sale price of an undiscounted item.
pub fn sale_price(base_price: f64, discount_percent: f64) -> f64 {
    if discount_percent <= 0.0 {
        return base_price;
    }
    base_price - base_price * discount_percent / 100.0
}

/// Badge text for an active deal, e.g. `"20% OFF"`.
pub fn discount_label(discount_percent: i64) -> String {
    format!("{}% OFF", discount_percent)
}

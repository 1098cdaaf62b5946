mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod customers;
pub use customers::Customers;

mod customer_detail;
pub use customer_detail::CustomerDetail;

mod products;
pub use products::Products;

mod orders;
pub use orders::Orders;

mod not_found;
pub use not_found::NotFound;

use types::{OrderStatus, ProductStatus};

pub(crate) fn format_money(minor: i64, currency: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let minor = minor.abs();
    format!("{sign}{}.{:02} {currency}", minor / 100, minor % 100)
}

pub(crate) fn format_date(at: jiff::Timestamp) -> String {
    at.strftime("%b %d, %Y").to_string()
}

pub(crate) fn product_tone(status: ProductStatus) -> &'static str {
    match status {
        ProductStatus::Published => "success",
        ProductStatus::Draft => "warning",
        ProductStatus::Archived => "neutral",
    }
}

pub(crate) fn order_tone(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Placed => "info",
        OrderStatus::Processed => "warning",
        OrderStatus::Delivered => "info",
        OrderStatus::Complete => "success",
    }
}

#[cfg(test)]
mod tests {
    use super::format_money;

    #[test]
    fn money_formats_minor_units() {
        assert_eq!(format_money(184_500, "USD"), "1845.00 USD");
        assert_eq!(format_money(4_999, "USD"), "49.99 USD");
        assert_eq!(format_money(-250, "USD"), "-2.50 USD");
        assert_eq!(format_money(0, "USD"), "0.00 USD");
    }
}

//! The in-memory demo dataset behind the resource API.
//!
//! Stands in for a real commerce backend: fixed records, deterministic
//! ids, queried through [`crate::query`]. Swapping in a real data source
//! replaces this module without touching the API surface.

use std::sync::LazyLock;

use jiff::{SignedDuration, Timestamp};
use types::{
    Controller, Customer, Order, OrderStatus, Page, Product, ProductStatus, Result, err,
};
use uuid::Uuid;

use crate::query::{self, ListQuery};

static STORE: LazyLock<Store> = LazyLock::new(Store::seed);

/// How far back an order still counts for the "ordered recently" view.
const RECENT_ORDER_WINDOW: SignedDuration = SignedDuration::from_hours(30 * 24);

pub fn list_customers(controller: &Controller) -> Page<Customer> {
    query::run(
        &STORE.customers,
        controller,
        &ListQuery {
            searchable: &["fullName", "email", "phone"],
            view: customer_view,
        },
    )
}

pub fn get_customer(id: Uuid) -> Result<Customer> {
    STORE
        .customers
        .iter()
        .find(|customer| customer.id == id)
        .cloned()
        .ok_or_else(|| err!("no customer with id {id}"))
}

/// A customer's orders, newest first.
pub fn list_customer_orders(customer_id: Uuid) -> Vec<Order> {
    let mut orders: Vec<Order> = STORE
        .orders
        .iter()
        .filter(|order| order.customer_id == customer_id)
        .cloned()
        .collect();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

pub fn list_products(controller: &Controller) -> Page<Product> {
    query::run(
        &STORE.products,
        controller,
        &ListQuery {
            searchable: &["name", "sku"],
            view: product_view,
        },
    )
}

pub fn list_orders(controller: &Controller) -> Page<Order> {
    query::run(
        &STORE.orders,
        controller,
        &ListQuery {
            searchable: &["number", "customerName"],
            view: order_view,
        },
    )
}

fn customer_view(customer: &Customer, view: &str) -> bool {
    match view {
        "isReturning" => customer.is_returning,
        "orderedRecently" => customer
            .last_order_at
            .is_some_and(|at| Timestamp::now().duration_since(at) <= RECENT_ORDER_WINDOW),
        _ => true,
    }
}

fn product_view(product: &Product, view: &str) -> bool {
    match view {
        "published" => product.status == ProductStatus::Published,
        "draft" => product.status == ProductStatus::Draft,
        "archived" => product.status == ProductStatus::Archived,
        _ => true,
    }
}

fn order_view(order: &Order, view: &str) -> bool {
    match view {
        "placed" => order.status == OrderStatus::Placed,
        "processed" => order.status == OrderStatus::Processed,
        "delivered" => order.status == OrderStatus::Delivered,
        "complete" => order.status == OrderStatus::Complete,
        _ => true,
    }
}

struct Store {
    customers: Vec<Customer>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

fn ts(iso: &str) -> Timestamp {
    iso.parse().unwrap_or(Timestamp::UNIX_EPOCH)
}

fn days_ago(days: i64) -> Timestamp {
    Timestamp::now()
        .checked_sub(SignedDuration::from_hours(days * 24))
        .unwrap_or(Timestamp::UNIX_EPOCH)
}

fn customer_id(n: u128) -> Uuid {
    Uuid::from_u128(0x00C0_0000_0000_0000_0000_0000_0000_0000 | n)
}

fn product_id(n: u128) -> Uuid {
    Uuid::from_u128(0x00D0_0000_0000_0000_0000_0000_0000_0000 | n)
}

fn order_id(n: u128) -> Uuid {
    Uuid::from_u128(0x00E0_0000_0000_0000_0000_0000_0000_0000 | n)
}

impl Store {
    fn seed() -> Self {
        let customers = seed_customers();
        let orders = seed_orders(&customers);
        Self {
            customers,
            products: seed_products(),
            orders,
        }
    }
}

fn seed_customers() -> Vec<Customer> {
    // (name, email, phone, returning, orders, spent, last order days ago, created, updated)
    let rows: [(&str, &str, &str, bool, u32, i64, Option<i64>, &str, &str); 23] = [
        ("Ann Harper", "ann.harper@getmail.test", "+1 415 555 0101", true, 12, 184_500, Some(3), "2024-02-11T09:14:00Z", "2026-07-28T16:02:00Z"),
        ("Bruno Costa", "bruno.costa@lunamail.test", "+351 21 555 0102", false, 1, 4_999, Some(210), "2024-03-02T11:40:00Z", "2026-01-19T10:11:00Z"),
        ("Carla Jensen", "carla.jensen@nordpost.test", "+45 33 555 0103", true, 7, 96_200, Some(12), "2024-04-18T08:05:00Z", "2026-07-15T09:27:00Z"),
        ("Dmitri Volkov", "d.volkov@getmail.test", "+49 30 555 0104", false, 2, 15_800, Some(95), "2024-05-30T14:22:00Z", "2026-04-03T18:45:00Z"),
        ("Elena Petrova", "elena.petrova@lunamail.test", "+34 91 555 0105", true, 19, 402_350, Some(1), "2024-06-09T10:00:00Z", "2026-08-01T07:58:00Z"),
        ("Farid Haddad", "farid.haddad@nordpost.test", "+33 1 555 0106", false, 0, 0, None, "2024-07-21T17:33:00Z", "2025-11-05T12:12:00Z"),
        ("Grace Okafor", "grace.okafor@getmail.test", "+44 20 555 0107", true, 9, 127_400, Some(8), "2024-08-14T09:47:00Z", "2026-07-22T14:30:00Z"),
        ("Hana Sato", "hana.sato@lunamail.test", "+81 3 555 0108", false, 3, 28_900, Some(64), "2024-09-03T06:18:00Z", "2026-05-29T08:09:00Z"),
        ("Ivo Marek", "ivo.marek@nordpost.test", "+420 2 555 0109", false, 1, 7_250, Some(180), "2024-10-25T13:51:00Z", "2026-02-07T19:24:00Z"),
        ("Julia Weber", "julia.weber@getmail.test", "+43 1 555 0110", true, 14, 231_600, Some(5), "2024-11-07T15:09:00Z", "2026-07-30T11:44:00Z"),
        ("Kwame Mensah", "kwame.mensah@lunamail.test", "+233 30 555 0111", false, 2, 18_350, Some(130), "2024-12-19T10:36:00Z", "2026-03-24T16:51:00Z"),
        ("Lucia Moretti", "lucia.moretti@nordpost.test", "+39 06 555 0112", true, 6, 74_900, Some(21), "2025-01-28T08:54:00Z", "2026-07-11T13:20:00Z"),
        ("Marta Kowalska", "marta.k@getmail.test", "", true, 8, 88_100, Some(17), "2025-02-16T12:41:00Z", "2026-07-18T10:05:00Z"),
        ("Noah Lindqvist", "noah.lindqvist@lunamail.test", "+46 8 555 0114", false, 0, 0, None, "2025-03-05T09:02:00Z", "2025-12-14T15:37:00Z"),
        ("Olivia Tan", "olivia.tan@nordpost.test", "+65 6 555 0115", true, 11, 159_750, Some(6), "2025-04-22T07:26:00Z", "2026-07-25T09:48:00Z"),
        ("Pavel Horak", "pavel.horak@getmail.test", "+420 2 555 0116", false, 4, 36_400, Some(77), "2025-05-11T16:13:00Z", "2026-05-16T17:02:00Z"),
        ("Quinn Murphy", "quinn.murphy@lunamail.test", "+353 1 555 0117", false, 1, 9_999, Some(150), "2025-06-01T11:58:00Z", "2026-03-06T08:33:00Z"),
        ("Rosa Delgado", "rosa.delgado@nordpost.test", "+52 55 555 0118", true, 16, 287_300, Some(2), "2025-06-29T14:07:00Z", "2026-08-02T12:19:00Z"),
        ("Samir Patel", "samir.patel@getmail.test", "+91 22 555 0119", false, 3, 24_650, Some(48), "2025-07-17T10:29:00Z", "2026-06-20T15:55:00Z"),
        ("Tessa Brink", "tessa.brink@lunamail.test", "+31 20 555 0120", false, 2, 21_200, Some(101), "2025-08-09T08:44:00Z", "2026-04-27T11:16:00Z"),
        ("Umar Farouk", "umar.farouk@nordpost.test", "", false, 0, 0, None, "2025-09-26T13:12:00Z", "2026-01-08T09:41:00Z"),
        ("Vera Niemi", "vera.niemi@getmail.test", "+358 9 555 0122", true, 5, 61_800, Some(26), "2025-10-15T09:21:00Z", "2026-07-05T14:58:00Z"),
        ("Wiktor Nowak", "wiktor.nowak@lunamail.test", "+48 22 555 0123", false, 1, 8_400, Some(165), "2025-11-30T15:46:00Z", "2026-02-21T10:27:00Z"),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, email, phone, returning, orders, spent, last_order, created, updated))| {
                Customer {
                    id: customer_id(i as u128 + 1),
                    full_name: name.into(),
                    email: email.into(),
                    phone: phone.into(),
                    is_returning: returning,
                    orders_count: orders,
                    total_spent: spent,
                    currency: "USD".into(),
                    last_order_at: last_order.map(days_ago),
                    created_at: ts(created),
                    updated_at: ts(updated),
                }
            },
        )
        .collect()
}

fn seed_products() -> Vec<Product> {
    use ProductStatus::*;

    // (name, sku, status, price, stock, created, updated)
    let rows: [(&str, &str, ProductStatus, i64, u32, &str, &str); 17] = [
        ("Canvas Weekender Bag", "BAG-CNV-001", Published, 12_900, 42, "2024-05-02T09:00:00Z", "2026-06-30T10:15:00Z"),
        ("Leather Card Holder", "ACC-LTH-002", Published, 3_450, 160, "2024-05-02T09:05:00Z", "2026-07-12T08:40:00Z"),
        ("Merino Crew Sweater", "KNT-MRN-003", Published, 9_800, 73, "2024-06-15T14:20:00Z", "2026-07-01T16:22:00Z"),
        ("Linen Overshirt", "SHT-LNN-004", Draft, 7_600, 0, "2024-07-08T11:10:00Z", "2026-05-18T09:03:00Z"),
        ("Selvedge Denim Jacket", "JKT-DNM-005", Published, 18_500, 28, "2024-08-21T10:45:00Z", "2026-07-20T13:11:00Z"),
        ("Wool Beanie", "ACC-WOL-006", Archived, 2_900, 0, "2024-09-12T08:30:00Z", "2025-12-02T12:46:00Z"),
        ("Organic Cotton Tee", "TEE-OGC-007", Published, 2_500, 310, "2024-10-05T13:55:00Z", "2026-07-29T07:52:00Z"),
        ("Ripstop Field Pants", "PNT-RSP-008", Published, 11_200, 54, "2024-11-19T15:40:00Z", "2026-06-08T17:34:00Z"),
        ("Suede Chukka Boots", "SHO-SDE-009", Draft, 21_900, 12, "2025-01-09T09:25:00Z", "2026-04-14T10:58:00Z"),
        ("Quilted Liner Vest", "VST-QLT-010", Published, 8_700, 47, "2025-02-27T12:05:00Z", "2026-07-07T15:29:00Z"),
        ("Canvas High Tops", "SHO-CNV-011", Published, 7_900, 89, "2025-03-16T08:50:00Z", "2026-07-26T09:44:00Z"),
        ("Herringbone Scarf", "ACC-HRB-012", Archived, 4_200, 0, "2025-04-30T16:35:00Z", "2026-01-22T11:18:00Z"),
        ("Twill Chore Coat", "JKT-TWL-013", Published, 15_400, 33, "2025-05-23T10:15:00Z", "2026-07-17T14:07:00Z"),
        ("Corduroy Cap", "ACC-CRD-014", Published, 3_100, 125, "2025-06-11T07:40:00Z", "2026-06-25T08:21:00Z"),
        ("Thermal Henley", "TEE-THM-015", Draft, 4_800, 0, "2025-07-29T14:50:00Z", "2026-03-31T16:40:00Z"),
        ("Waxed Canvas Tote", "BAG-WXC-016", Published, 9_300, 61, "2025-09-04T11:30:00Z", "2026-07-23T12:55:00Z"),
        ("Alpaca Cardigan", "KNT-ALP-017", Published, 16_700, 19, "2025-10-18T09:55:00Z", "2026-08-01T10:02:00Z"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, sku, status, price, stock, created, updated))| Product {
            id: product_id(i as u128 + 1),
            name: name.into(),
            sku: sku.into(),
            status,
            price,
            currency: "USD".into(),
            stock,
            created_at: ts(created),
            updated_at: ts(updated),
        })
        .collect()
}

fn seed_orders(customers: &[Customer]) -> Vec<Order> {
    use OrderStatus::*;

    // (customer index, status, total, created, updated)
    let rows: [(usize, OrderStatus, i64, &str, &str); 30] = [
        (0, Complete, 18_400, "2026-02-03T10:12:00Z", "2026-02-10T09:00:00Z"),
        (4, Complete, 52_900, "2026-02-14T15:48:00Z", "2026-02-21T11:30:00Z"),
        (2, Complete, 9_800, "2026-02-28T08:27:00Z", "2026-03-07T14:12:00Z"),
        (9, Complete, 27_100, "2026-03-09T12:05:00Z", "2026-03-16T10:44:00Z"),
        (17, Complete, 33_500, "2026-03-18T09:51:00Z", "2026-03-25T16:08:00Z"),
        (6, Complete, 14_600, "2026-03-27T14:33:00Z", "2026-04-03T08:59:00Z"),
        (14, Complete, 21_700, "2026-04-05T11:19:00Z", "2026-04-12T13:26:00Z"),
        (0, Complete, 7_900, "2026-04-16T16:42:00Z", "2026-04-23T09:37:00Z"),
        (11, Delivered, 12_300, "2026-04-29T10:58:00Z", "2026-05-06T15:14:00Z"),
        (4, Complete, 44_200, "2026-05-08T09:06:00Z", "2026-05-15T10:51:00Z"),
        (21, Delivered, 16_800, "2026-05-19T13:37:00Z", "2026-05-26T08:23:00Z"),
        (7, Complete, 8_700, "2026-05-28T08:14:00Z", "2026-06-04T12:40:00Z"),
        (18, Delivered, 24_650, "2026-06-06T15:29:00Z", "2026-06-13T09:16:00Z"),
        (9, Complete, 31_900, "2026-06-12T10:47:00Z", "2026-06-19T14:53:00Z"),
        (12, Delivered, 19_400, "2026-06-18T09:22:00Z", "2026-06-25T11:08:00Z"),
        (2, Delivered, 11_500, "2026-06-24T14:56:00Z", "2026-07-01T10:29:00Z"),
        (15, Processed, 9_300, "2026-06-30T08:41:00Z", "2026-07-07T13:45:00Z"),
        (4, Complete, 38_750, "2026-07-04T12:18:00Z", "2026-07-11T09:52:00Z"),
        (19, Processed, 15_200, "2026-07-08T10:04:00Z", "2026-07-15T16:31:00Z"),
        (6, Delivered, 22_800, "2026-07-12T15:13:00Z", "2026-07-19T08:47:00Z"),
        (0, Processed, 13_100, "2026-07-16T09:38:00Z", "2026-07-23T14:05:00Z"),
        (22, Processed, 8_400, "2026-07-19T11:55:00Z", "2026-07-26T10:21:00Z"),
        (9, Delivered, 26_300, "2026-07-22T08:09:00Z", "2026-07-29T12:57:00Z"),
        (14, Processed, 17_900, "2026-07-25T13:44:00Z", "2026-07-28T09:33:00Z"),
        (17, Placed, 41_600, "2026-07-28T10:26:00Z", "2026-07-28T10:26:00Z"),
        (2, Placed, 6_200, "2026-07-30T16:51:00Z", "2026-07-30T16:51:00Z"),
        (11, Placed, 10_900, "2026-07-31T09:17:00Z", "2026-07-31T09:17:00Z"),
        (4, Placed, 29_500, "2026-08-01T14:02:00Z", "2026-08-01T14:02:00Z"),
        (17, Placed, 12_700, "2026-08-02T11:39:00Z", "2026-08-02T11:39:00Z"),
        (0, Placed, 5_600, "2026-08-03T08:55:00Z", "2026-08-03T08:55:00Z"),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (customer_idx, status, total, created, updated))| {
            let customer = &customers[customer_idx % customers.len()];
            Order {
                id: order_id(i as u128 + 1),
                number: format!("ORD-{}", 1001 + i),
                customer_id: customer.id,
                customer_name: customer.full_name.clone(),
                status,
                total_amount: total,
                currency: "USD".into(),
                created_at: ts(created),
                updated_at: ts(updated),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_large_enough_to_paginate() {
        assert!(STORE.customers.len() > types::PAGE_SIZE);
        assert!(STORE.products.len() > types::PAGE_SIZE);
        assert!(STORE.orders.len() > types::PAGE_SIZE);
    }

    #[test]
    fn get_customer_by_unknown_id_is_an_error() {
        assert!(get_customer(Uuid::from_u128(0xDEAD)).is_err());
    }

    #[test]
    fn customer_orders_come_back_newest_first() {
        let ann = &STORE.customers[0];
        let orders = list_customer_orders(ann.id);
        assert!(!orders.is_empty());
        assert!(
            orders
                .windows(2)
                .all(|pair| pair[0].created_at >= pair[1].created_at)
        );
        assert!(orders.iter().all(|order| order.customer_id == ann.id));
    }

    #[test]
    fn product_views_partition_by_status() {
        let mut controller = Controller::default();
        controller.view = "draft".into();
        let page = list_products(&controller);
        assert!(page.total_count > 0);
        assert!(
            page.items
                .iter()
                .all(|product| product.status == ProductStatus::Draft)
        );
    }

    #[test]
    fn recently_ordered_customers_have_fresh_orders() {
        let mut controller = Controller::default();
        controller.view = "orderedRecently".into();
        let page = list_customers(&controller);
        assert!(page.total_count > 0);
        assert!(
            page.items
                .iter()
                .all(|customer| customer.last_order_at.is_some())
        );
    }
}

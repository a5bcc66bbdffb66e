//! Startup dataset for the mock API.
//!
//! Mirrors what a freshly provisioned store of the beauty shop looks like:
//! a 16-product catalog across four categories, the three service
//! categories with their services, one month of appointments and the
//! dashboard headline figures.

use super::store::{self, StoreError};
use chrono::NaiveDate;
use contracts::dashboards::d400_inventory_summary::{
    BestSellingProduct, DashboardStats, InventoryAmount, MostPurchasedDay, OutOfStockHighlight,
};
use contracts::dashboards::d401_service_summary::{
    MostBookedDay, ServiceCount, ServiceStats, TotalOrders,
};
use contracts::domain::a001_product::{Product, ProductDto};
use contracts::domain::a002_category::CategoryNode;
use contracts::domain::a003_service::{Service, ServiceDto};
use contracts::domain::a004_appointment::{Appointment, AppointmentDto};
use contracts::enums::AppointmentStatus;

/// Populate the store with the mock dataset. Idempotent: a store that
/// already has products is left untouched.
pub fn seed_store() -> Result<(), StoreError> {
    let mut store = store::write()?;
    if !store.products.is_empty() {
        return Ok(());
    }

    store.categories = categories();
    store.products = products();
    store.service_categories = service_categories();
    store.services = services();
    store.appointments = appointments();
    store.dashboard_stats = Some(dashboard_stats());
    store.service_stats = Some(service_stats());

    tracing::info!(
        products = store.products.len(),
        services = store.services.len(),
        appointments = store.appointments.len(),
        "Mock store seeded"
    );

    Ok(())
}

fn categories() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(
            "makeup",
            "Make up",
            &[
                "Foundations",
                "Concealers & Color Correctors",
                "Powder",
                "Lipstick",
                "Eyeliner & Kajal",
                "Mascara",
            ],
        ),
        CategoryNode::new("fragrances", "Fragrances", &["Women's", "Men's"]),
        CategoryNode::new(
            "personal-care",
            "Personal Care",
            &[
                "Skincare",
                "Sunscreens & Tanning Products",
                "Contraceptives & Lubricants",
                "Piercing & Tatoos Supplies",
                "Deodorants & Antiperspirants",
                "Lip Care",
            ],
        ),
        CategoryNode::new(
            "oral-care",
            "Oral Care",
            &["Teeth Whitening", "Toothpaste", "Toothbrush"],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    name: &str,
    category_id: &str,
    subcategory: &str,
    base_price: i64,
    cost_price: i64,
    stock_quantity: u32,
    reorder_level: u32,
    image: &str,
) -> Product {
    Product::new_for_insert(&ProductDto {
        name: name.to_string(),
        sku: "34/9492/0".to_string(),
        category_id: category_id.to_string(),
        subcategory: Some(subcategory.to_string()),
        base_price,
        cost_price: Some(cost_price),
        stock_quantity,
        reorder_level,
        unit: "piece".to_string(),
        image_url: Some(format!(
            "https://images.unsplash.com/{}?w=400",
            image
        )),
        ..Default::default()
    })
}

fn products() -> Vec<Product> {
    vec![
        // Makeup
        product("HD Foundation", "makeup", "Foundations", 50_000, 35_000, 150, 30, "photo-1522335789203-aabd1fc54bc9"),
        product("Makeup Kit", "makeup", "Concealers & Color Correctors", 80_000, 60_000, 300, 50, "photo-1596462502278-27bfdc403348"),
        product("Finishing Powder", "makeup", "Powder", 35_000, 25_000, 200, 40, "photo-1631214524020-7e18db7a8f86"),
        product("Matte Lipstick", "makeup", "Lipstick", 100_000, 80_000, 300, 50, "photo-1586495777744-4413f21062fa"),
        product("Eye Kajal", "makeup", "Eyeliner & Kajal", 25_000, 18_000, 250, 50, "photo-1512496015851-a90fb38ba796"),
        product("Volume Mascara", "makeup", "Mascara", 45_000, 32_000, 180, 35, "photo-1631730486572-226d1f595b68"),
        // Fragrances
        product("Floral Women Perfume", "fragrances", "Women's", 120_000, 90_000, 100, 20, "photo-1541643600914-78b084683601"),
        product("Beard Oil", "fragrances", "Men's", 80_000, 60_000, 300, 50, "photo-1608248543803-ba4f8c70ae0b"),
        product("Woody Men Cologne", "fragrances", "Men's", 150_000, 110_000, 80, 15, "photo-1585386959984-a4155224a1ad"),
        // Personal care
        product("Face Serum", "personal-care", "Skincare", 65_000, 45_000, 120, 25, "photo-1620916566398-39f1143ab7be"),
        product("SPF 50 Sunscreen", "personal-care", "Sunscreens & Tanning Products", 40_000, 28_000, 200, 40, "photo-1556228720-195a672e8a03"),
        product("Roll-On Deodorant", "personal-care", "Deodorants & Antiperspirants", 18_000, 12_000, 350, 70, "photo-1615634260167-c8cdede054de"),
        product("Lip Balm", "personal-care", "Lip Care", 8_000, 5_000, 500, 100, "photo-1591360236480-4ed861025fa1"),
        // Oral care
        product("Whitening Toothpaste", "oral-care", "Toothpaste", 12_000, 8_000, 400, 80, "photo-1622654862202-f85d4e92c028"),
        product("Electric Toothbrush", "oral-care", "Toothbrush", 35_000, 25_000, 100, 20, "photo-1607613009820-a29f7bb81c04"),
        product("Teeth Whitening Strips", "oral-care", "Teeth Whitening", 28_000, 20_000, 150, 30, "photo-1609735189047-3ea09aa8e89c"),
    ]
}

fn service_categories() -> Vec<CategoryNode> {
    vec![
        CategoryNode::new(
            "makeup",
            "Make up",
            &["Bridal Make Up", "Birthday Make up", "Glitter Make Up"],
        ),
        CategoryNode::new(
            "nails",
            "Nails",
            &["Long Nails", "Short Nails", "Acrylic Nails"],
        ),
        CategoryNode::new("hair", "Hair", &["Weaving", "Braiding", "Attachment"]),
    ]
}

fn service(
    name: &str,
    category_id: &str,
    subcategory: &str,
    description: &str,
    duration_minutes: u32,
    base_price: i64,
) -> Service {
    Service::new_for_insert(&ServiceDto {
        name: name.to_string(),
        category_id: category_id.to_string(),
        subcategory: Some(subcategory.to_string()),
        description: description.to_string(),
        duration_minutes,
        base_price,
        ..Default::default()
    })
}

fn services() -> Vec<Service> {
    vec![
        service("Bridal Makeup Package", "makeup", "Bridal Make Up", "Complete bridal makeup with trial session", 120, 50_000),
        service("Birthday Glam", "makeup", "Birthday Make up", "Fun and festive birthday makeup", 60, 20_000),
        service("Glitter Party Makeup", "makeup", "Glitter Make Up", "Sparkly makeup for parties and events", 90, 25_000),
        service("Acrylic Full Set", "nails", "Acrylic Nails", "Full set of acrylic nails with design", 120, 15_000),
        service("Long Nails Extension", "nails", "Long Nails", "Nail extension for long nails", 90, 12_000),
        service("Short Nails Manicure", "nails", "Short Nails", "Professional manicure for short nails", 45, 8_000),
        service("Hair Weaving", "hair", "Weaving", "Professional hair weaving service", 180, 30_000),
        service("Box Braids", "hair", "Braiding", "Stylish box braids", 240, 25_000),
        service("Hair Attachment", "hair", "Attachment", "Hair attachment installation", 120, 20_000),
    ]
}

fn appointment(
    date: NaiveDate,
    start_time: &str,
    end_time: &str,
    service_label: &str,
    customer: &str,
    avatar_img: u32,
    status: AppointmentStatus,
) -> Appointment {
    Appointment::new_for_insert(&AppointmentDto {
        id: None,
        date,
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        service: service_label.to_string(),
        customer_name: customer.to_string(),
        customer_avatar: Some(format!("https://i.pravatar.cc/150?img={}", avatar_img)),
        status: Some(status),
    })
}

fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::{Confirmed, Pending};

    let day = |d: u32| NaiveDate::from_ymd_opt(2026, 3, d).unwrap_or_default();
    vec![
        appointment(day(2), "10:00", "11:00", "Hair", "Sarah Johnson", 1, Confirmed),
        appointment(day(4), "10:00", "11:00", "Make Up", "Emily Davis", 5, Confirmed),
        appointment(day(6), "10:00", "11:00", "Nails", "Jessica Wilson", 9, Confirmed),
        appointment(day(12), "10:00", "11:00", "Make Up", "Maria Garcia", 10, Confirmed),
        appointment(day(16), "10:00", "11:00", "Make Up", "Amanda Lee", 20, Confirmed),
        appointment(day(18), "10:00", "11:00", "Nails", "Lisa Brown", 25, Pending),
        appointment(day(24), "10:00", "11:00", "Make Up", "Rachel Taylor", 30, Confirmed),
        appointment(day(2), "14:00", "15:00", "Nails", "Jennifer White", 12, Confirmed),
        appointment(day(12), "15:00", "16:00", "Hair", "Michelle Green", 15, Pending),
    ]
}

fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        best_selling_product: BestSellingProduct {
            name: "Sterling Bottle".to_string(),
            units_sold: 300,
            change: 36,
        },
        inventory_amount: InventoryAmount {
            count: 500,
            change: 36,
        },
        most_purchased_day: MostPurchasedDay {
            day: "Friday".to_string(),
            units_sold: 300,
            change: 36,
        },
        products_out_of_stock: OutOfStockHighlight {
            name: "Toothpaste".to_string(),
            stock: 0,
            change: 36,
        },
    }
}

fn service_stats() -> ServiceStats {
    ServiceStats {
        most_booked_service: ServiceCount {
            name: "Nails".to_string(),
            orders: 300,
            change: 36,
        },
        total_orders: TotalOrders {
            count: 50,
            change: 36,
        },
        most_booked_day: MostBookedDay {
            day: "Friday".to_string(),
            orders: 300,
            change: 36,
        },
        lowest_orders: ServiceCount {
            name: "Male Grooming".to_string(),
            orders: 0,
            change: 36,
        },
    }
}

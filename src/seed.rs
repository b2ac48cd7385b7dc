//! Sample collections written to empty slots on first access

use chrono::{DateTime, TimeZone, Utc};

use crate::model::{Book, Customer, Link, LinkType, Order, OrderItem, OrderStatus};

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn book(
    id: &str,
    title: &str,
    author: &str,
    price: u64,
    image: &str,
    rating: f32,
    reviews: u32,
    category: &str,
    stock_count: u32,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        price,
        // Catalog prices carry a flat 20% discount
        discounted_price: price * 4 / 5,
        image: image.to_string(),
        rating,
        reviews,
        category: category.to_string(),
        description: None,
        publisher: None,
        publish_year: None,
        pages: None,
        language: None,
        isbn: None,
        features: None,
        in_stock: true,
        stock_count,
    }
}

pub fn books() -> Vec<Book> {
    let mut first = book(
        "1",
        "پدر",
        "میخائیل بولگاکوف",
        89_000,
        "/book-cover-1.png",
        4.0,
        234,
        "fiction",
        15,
    );
    first.description = Some(
        "پدر یکی از بهترین آثار ادبی جهان است که داستان رابطه پیچیده بین پدر و فرزند را به تصویر می‌کشد."
            .to_string(),
    );
    first.publisher = Some("انتشارات افق".to_string());
    first.publish_year = Some(1384);
    first.pages = Some(320);
    first.language = Some("فارسی".to_string());
    first.isbn = Some("978-964-6436-12-5".to_string());
    first.features = Some(vec![
        "ترجمه عالی و دقیق".to_string(),
        "چاپ لوکس و زیبا".to_string(),
        "جلد سخت و دوام‌دار".to_string(),
    ]);

    vec![
        first,
        book("2", "ما کیستیم", "علی شریعتی", 75_000, "/book-cover-2.jpg", 5.0, 412, "history", 8),
        book("3", "یک یادداشت معمولی", "دوستایفسکی", 95_000, "/book-cover-3.png", 4.0, 178, "fiction", 3),
        book("4", "عادت‌های موفق", "جیمز کلیئر", 82_000, "/book-cover-4.png", 5.0, 567, "self-help", 12),
        book("5", "علم دین", "امام غزالی", 68_000, "/book-cover-5.png", 3.0, 89, "science", 5),
        book("6", "شنل‌های شگفت‌انگیز", "نویسنده ناشناخته", 55_000, "/book-cover-6.png", 4.0, 234, "kids", 20),
        book("7", "تاریخ ایران", "کاظم پایا", 120_000, "/book-cover-7.png", 4.0, 145, "history", 7),
        book("8", "سفر به ماه", "ژول ورن", 78_000, "/book-cover-8.png", 5.0, 356, "fiction", 10),
    ]
}

fn line(book: &Book, quantity: u32) -> OrderItem {
    OrderItem {
        quantity,
        ..OrderItem::from(book)
    }
}

pub fn orders() -> Vec<Order> {
    let catalog = books();
    let by_id = |id: &str| catalog.iter().find(|b| b.id == id);

    let mut orders = Vec::new();

    if let (Some(father), Some(habits)) = (by_id("1"), by_id("4")) {
        orders.push(Order {
            id: "1001".to_string(),
            customer_name: "علی محمدی".to_string(),
            customer_email: Some("ali@example.com".to_string()),
            customer_phone: Some("09123456789".to_string()),
            items: vec![line(father, 2), line(habits, 1)],
            total: 208_000,
            status: OrderStatus::Delivered,
            created_at: day(2024, 1, 15),
            shipping_address: Some("تهران، خیابان ولیعصر، پلاک 123".to_string()),
            notes: None,
        });
    }

    if let Some(who) = by_id("2") {
        orders.push(Order {
            id: "1002".to_string(),
            customer_name: "فاطمه کریمی".to_string(),
            customer_email: Some("fateme@example.com".to_string()),
            customer_phone: Some("09129876543".to_string()),
            items: vec![line(who, 1)],
            total: 60_000,
            status: OrderStatus::Processing,
            created_at: day(2024, 1, 14),
            shipping_address: Some("اصفهان، خیابان چهارباغ، پلاک 45".to_string()),
            notes: None,
        });
    }

    if let (Some(note), Some(faith)) = (by_id("3"), by_id("5")) {
        orders.push(Order {
            id: "1003".to_string(),
            customer_name: "محمود احمدی".to_string(),
            customer_email: Some("mahmood@example.com".to_string()),
            customer_phone: None,
            items: vec![line(note, 1), line(faith, 1)],
            total: 130_400,
            status: OrderStatus::Pending,
            created_at: day(2024, 1, 13),
            shipping_address: None,
            notes: None,
        });
    }

    orders
}

pub fn customers() -> Vec<Customer> {
    let customer = |id: &str,
                    name: &str,
                    email: &str,
                    phone: Option<&str>,
                    total_orders: u32,
                    total_spent: u64,
                    last_order: DateTime<Utc>,
                    registered: DateTime<Utc>| Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: Some(email.to_string()),
        phone: phone.map(str::to_string),
        total_orders,
        total_spent,
        last_order_date: Some(last_order),
        registered_at: registered,
    };

    vec![
        customer("c1", "علی محمدی", "ali@example.com", Some("09123456789"), 3, 450_000, day(2024, 1, 15), day(2024, 1, 1)),
        customer("c2", "فاطمه کریمی", "fateme@example.com", Some("09129876543"), 2, 120_000, day(2024, 1, 14), day(2024, 1, 5)),
        customer("c3", "محمود احمدی", "mahmood@example.com", None, 1, 130_400, day(2024, 1, 13), day(2024, 1, 10)),
        customer("c4", "زهرا علوی", "zahra@example.com", Some("09131111111"), 5, 680_000, day(2024, 1, 12), day(2023, 12, 20)),
    ]
}

fn link(id: &str, label: &str, kind: LinkType, category_key: Option<&str>, url: &str, order: u32) -> Link {
    Link {
        id: id.to_string(),
        label: label.to_string(),
        url: url.to_string(),
        kind,
        category_key: category_key.map(str::to_string),
        order: Some(order),
    }
}

pub fn links() -> Vec<Link> {
    use LinkType::*;

    vec![
        // Category menu under the header
        link("cat1", "تمام کتاب‌ها", Category, Some("all"), "/", 1),
        link("cat2", "داستان و رمان", Category, Some("fiction"), "/category/fiction", 2),
        link("cat3", "تاریخ و تمدن", Category, Some("history"), "/category/history", 3),
        link("cat4", "علمی و تحقیقاتی", Category, Some("science"), "/category/science", 4),
        link("cat5", "خودیاری و موفقیت", Category, Some("self-help"), "/category/self-help", 5),
        link("cat6", "کودکان و نوجوانان", Category, Some("kids"), "/category/kids", 6),
        // Footer categories
        link("fc1", "داستان و رمان", FooterCategory, None, "/category/fiction", 1),
        link("fc2", "تاریخ و تمدن", FooterCategory, None, "/category/history", 2),
        link("fc3", "علمی و تحقیقاتی", FooterCategory, None, "/category/science", 3),
        link("fc4", "خودیاری و موفقیت", FooterCategory, None, "/category/self-help", 4),
        link("fc5", "کودکان و نوجوانان", FooterCategory, None, "/category/kids", 5),
        // Footer support
        link("fs1", "سوالات متداول", FooterSupport, None, "/faq", 1),
        link("fs2", "قوانین و مقررات", FooterSupport, None, "/terms", 2),
        link("fs3", "حریم خصوصی", FooterSupport, None, "/privacy", 3),
        link("fs4", "پیگیری سفارش", FooterSupport, None, "/track-order", 4),
        // Social
        link("soc1", "اینستاگرام", Social, None, "https://instagram.com/yourshop", 1),
        link("soc2", "تلگرام", Social, None, "https://t.me/yourshop", 2),
        link("soc3", "واتساپ", Social, None, "https://wa.me/989123456789", 3),
    ]
}

use stockroom_core::AggregateRoot;
use stockroom_warehouse::{Category, Decimal, DomainError, Product, ProductId, Warehouse};

fn setup() {
    stockroom_observability::init();
}

fn add(warehouse: &mut Warehouse, name: &str, category: &str, num: i64, scale: u32) -> Product {
    warehouse
        .add_product(
            ProductId::new(),
            name,
            &Category::of(category).unwrap(),
            Decimal::new(num, scale),
        )
        .unwrap()
}

#[test]
fn category_interning() {
    setup();
    let first = Category::of("test").unwrap();
    assert_eq!(first.name(), "Test");
    assert!(Category::ptr_eq(&first, &Category::of("test").unwrap()));
}

#[test]
fn empty_warehouse() {
    setup();
    let warehouse = Warehouse::with_name("New warehouse");
    assert!(warehouse.is_empty());
    assert!(warehouse.products().is_empty());
}

#[test]
fn add_and_fetch() {
    setup();
    let mut warehouse = Warehouse::with_name("New warehouse");
    let milk = add(&mut warehouse, "Milk", "Dairy", 999, 2);

    assert!(!warehouse.is_empty());
    assert_eq!(warehouse.products(), vec![milk.clone()]);
    assert_eq!(warehouse.product_by_id(milk.id()), Some(milk));

    let unknown: ProductId = "5fc03087-d265-11e7-b8c6-83e29cd24f4c".parse().unwrap();
    assert!(warehouse.product_by_id(unknown).is_none());
}

#[test]
fn duplicate_id_is_rejected() {
    setup();
    let mut warehouse = Warehouse::with_name("New warehouse");
    let milk = add(&mut warehouse, "Milk", "Dairy", 999, 2);

    let err = warehouse
        .add_product(milk.id(), "Milk", &Category::of("Dairy").unwrap(), Decimal::new(999, 2))
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidArgument(
            "Product with that id already exists, use updateProduct for updates.".to_string()
        )
    );
}

#[test]
fn grouping_and_filtering() {
    setup();
    let mut warehouse = Warehouse::with_name("New warehouse");
    add(&mut warehouse, "Milk", "Dairy", 999, 2);
    add(&mut warehouse, "Apple", "Fruit", 290, 2);
    let bacon = add(&mut warehouse, "Bacon", "Meat", 1567, 2);

    let groups = warehouse.products_grouped_by_category();
    assert_eq!(groups.len(), 3);
    assert!(groups.values().all(|bucket| bucket.len() == 1));

    let steak = add(&mut warehouse, "Steak", "Meat", 399, 0);
    assert_eq!(
        warehouse.products_by(&Category::of("Meat").unwrap()),
        vec![bacon, steak]
    );
    assert_eq!(warehouse.version(), 4);
}

#[test]
fn product_snapshot_is_read_only() {
    setup();
    let mut warehouse = Warehouse::with_name("New warehouse");
    add(&mut warehouse, "Milk", "Dairy", 999, 2);

    let mut products = warehouse.products();
    let err = products.remove(0).unwrap_err();
    assert!(matches!(err, DomainError::Unsupported(_)));
    assert_eq!(products.len(), 1);
}

#[test]
fn shared_warehouse_is_interned_by_name() {
    setup();
    let a = Warehouse::shared("scenario depot");
    let b = Warehouse::shared("scenario depot");
    assert!(std::sync::Arc::ptr_eq(&a, &b));

    let milk = add(&mut a.write().unwrap(), "Milk", "Dairy", 999, 2);
    assert_eq!(b.read().unwrap().product_by_id(milk.id()), Some(milk));
    assert_eq!(b.read().unwrap().name(), "scenario depot");
}

#[test]
fn products_serialize_as_json_list() {
    setup();
    let mut warehouse = Warehouse::get_instance();
    add(&mut warehouse, "Apple", "fruit", 290, 2);

    let json = serde_json::to_value(warehouse.products()).unwrap();
    assert_eq!(json[0]["name"], "Apple");
    assert_eq!(json[0]["category"], "Fruit");
    assert_eq!(json[0]["price"], "2.90");
}

//! Demo seed data: a handful of customers and the spare-part catalog.

use rust_decimal_macros::dec;

use salesdesk_core::EntityId;
use salesdesk_parties::{Customer, CustomerId};
use salesdesk_products::{Product, ProductId};

use crate::in_memory::{InMemoryCustomerDirectory, InMemoryProductCatalog};

fn customer(
    name: &str,
    contact_name: &str,
    email: &str,
    phone: &str,
    address: &str,
    city: &str,
    tax_id: &str,
) -> Customer {
    Customer {
        id: CustomerId::new(EntityId::new()),
        name: name.to_string(),
        contact_name: contact_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        address: Some(address.to_string()),
        city: Some(city.to_string()),
        tax_id: Some(tax_id.to_string()),
    }
}

fn product(code: &str, name: &str, base_price: rust_decimal::Decimal) -> Product {
    Product {
        id: ProductId::new(EntityId::new()),
        code: code.to_string(),
        name: name.to_string(),
        base_price,
    }
}

pub fn demo_customers() -> Vec<Customer> {
    vec![
        customer(
            "Autopartes Norte",
            "Laura Gómez",
            "contacto@autopartesnorte.com",
            "+57 3001234567",
            "Av. Central 123",
            "Bogotá",
            "900123456",
        ),
        customer(
            "Motores Express",
            "Juan Pérez",
            "ventas@motoresexpress.com",
            "+57 3107654321",
            "Calle 45 #12-34",
            "Medellín",
            "901234567",
        ),
        customer(
            "Repuestos del Valle",
            "Carolina Ruiz",
            "info@repuestosvalle.com",
            "+57 3159876543",
            "Cra. 10 #45-21",
            "Cali",
            "800987654",
        ),
        customer(
            "Transmisiones ACME",
            "Andrés Torres",
            "atencion@transacme.com",
            "+57 3501239876",
            "Zona Industrial 7",
            "Barranquilla",
            "901112233",
        ),
        customer(
            "Frenos y Más",
            "Paula Silva",
            "ventas@frenosymas.com",
            "+57 3024567890",
            "Autopista Norte Km 12",
            "Bogotá",
            "900555666",
        ),
    ]
}

pub fn demo_products() -> Vec<Product> {
    vec![
        product("REP-001", "Filtro de aire", dec!(25.00)),
        product("REP-002", "Bujía estándar", dec!(8.50)),
        product("REP-003", "Pastillas de freno", dec!(45.90)),
        product("REP-004", "Alternador", dec!(180.00)),
        product("REP-005", "Radiador", dec!(210.50)),
        product("REP-006", "Amortiguador", dec!(95.00)),
        product("REP-007", "Kit de embrague", dec!(320.00)),
        product("REP-008", "Aceite sintético 5W30", dec!(35.75)),
        product("REP-009", "Batería 12V", dec!(120.00)),
        product("REP-010", "Correa de distribución", dec!(65.00)),
    ]
}

/// Load the demo data into fresh in-memory lookups, returning the inserted
/// records so callers know the generated ids.
pub fn seed(
    customers: &InMemoryCustomerDirectory,
    products: &InMemoryProductCatalog,
) -> (Vec<Customer>, Vec<Product>) {
    let demo_customers = demo_customers();
    let demo_products = demo_products();
    for customer in &demo_customers {
        customers.insert(customer.clone());
    }
    for product in &demo_products {
        products.insert(product.clone());
    }
    (demo_customers, demo_products)
}

//! Seed — example templates written by `formtpl init_db`.

use crate::store::{JsonStore, StoreError};
use crate::types::{FieldType, Template};

/// The example templates, in insertion order.
pub fn example_templates() -> Vec<Template> {
    use FieldType::*;

    vec![
        Template::new("Данные пользователя")
            .field("login", Email)
            .field("tel", Phone),
        Template::new("Форма заказа")
            .field("customer", Text)
            .field("order_id", Text)
            .field("дата_заказа", Date)
            .field("contact", Phone),
        Template::new("Проба")
            .field("f_name1", Email)
            .field("f_name2", Date),
        Template::new("Простая форма")
            .field("user_name", Text)
            .field("user_email", Email),
        Template::new("Форма с датой")
            .field("event_date", Date)
            .field("event_name", Text),
        Template::new("Контактная форма")
            .field("phone", Phone)
            .field("email", Email)
            .field("message", Text),
    ]
}

/// Empty the store's table and insert [`example_templates`]. Returns the
/// number of templates stored afterwards.
pub fn seed(store: &JsonStore) -> Result<usize, StoreError> {
    store.truncate()?;
    for template in example_templates() {
        store.insert(&template)?;
    }
    let count = store.all()?.len();
    tracing::info!(path = %store.path().display(), count, "seeded template store");
    Ok(count)
}

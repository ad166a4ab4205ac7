//! Courier domain model.

/// A delivery courier attached to one delivery office.
#[derive(Debug, Clone, PartialEq)]
pub struct Courier {
    pub courier_id: String,
    pub name: String,
    pub office_id: String,
}

impl Courier {
    pub fn new(
        courier_id: impl Into<String>,
        name: impl Into<String>,
        office_id: impl Into<String>,
    ) -> Self {
        Self {
            courier_id: courier_id.into(),
            name: name.into(),
            office_id: office_id.into(),
        }
    }

    /// Label shown in courier pickers: `"{id} - {name}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use antaran_rust::db::models::Courier;
    ///
    /// let courier = Courier::new("P017", "Budi Santoso", "40115");
    /// assert_eq!(courier.display_label(), "P017 - Budi Santoso");
    /// ```
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.courier_id, self.name)
    }
}

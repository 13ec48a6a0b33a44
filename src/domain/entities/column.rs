#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,
    pub title: String,
    pub sortable: bool,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            sortable: true,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Columns shown for the bundled people dataset.
pub fn default_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("index", "Index"),
        ColumnDef::new("name", "Name"),
        ColumnDef::new("gender", "Gender"),
        ColumnDef::new("age", "Age"),
        ColumnDef::new("email", "Email"),
        ColumnDef::new("phone", "Phone"),
        ColumnDef::new("address", "Address").unsortable(),
    ]
}

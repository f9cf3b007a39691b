use gallery_fetch::GalleryItem;
use tabled::{
    Table, Tabled,
    settings::{Panel, Remove, Style, object::Rows},
};

#[derive(Debug, Clone, Default)]
pub struct Formatter {
    pub header: Option<String>,
    pub footer: Option<String>,
    /// Drop the column-name row.
    pub col_name: bool,
}

impl Formatter {
    pub fn build<T: Tabled, I: IntoIterator<Item = T>>(self, data: I) -> Table {
        let mut table = Table::new(data);
        if self.col_name {
            table.with(Remove::row(Rows::first()));
        }
        if let Some(header) = self.header {
            table.with(Panel::header(header));
        }
        if let Some(footer) = self.footer {
            table.with(Panel::footer(footer));
        }

        table.with(Style::blank());
        table
    }
}

#[derive(Debug, Tabled)]
pub struct PhotoRow<'a> {
    #[tabled(rename = "ID")]
    pub id: &'a str,
    #[tabled(rename = "Title")]
    pub title: &'a str,
    #[tabled(rename = "URL")]
    pub url: &'a str,
}

impl<'a> From<&'a GalleryItem> for PhotoRow<'a> {
    fn from(item: &'a GalleryItem) -> Self {
        Self {
            id: &item.id,
            title: &item.title,
            url: &item.url,
        }
    }
}

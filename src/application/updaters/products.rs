// Products updater - top-selling product cards
use super::{ids, SectionOutcome, MISSING_VALUE};
use crate::application::surface::{Node, Surface, SurfaceError};
use crate::domain::format::Formatter;
use crate::domain::sales::ProductSummary;
use maud::{html, Markup};

pub const PRODUCT_CARD_CLASS: &str = "product-card";
pub const EMPTY_ROW_CLASS: &str = "empty-row";
pub const NOT_FOUND_TEXT: &str = "No products found";

const DEFAULT_ICON_BG: &str = "#4F46E5";
const ICON_SIZE: u32 = 48;

#[derive(Debug, Clone, PartialEq)]
pub enum ProductIcon {
    Remote(String),
    Placeholder { letter: char, background: String },
}

impl ProductIcon {
    pub fn for_product(product: &ProductSummary) -> Self {
        if let Some(url) = product.remote_icon() {
            return ProductIcon::Remote(url.to_string());
        }

        let letter = product.display_name().chars().next().unwrap_or('?');
        let background = product
            .icon_bg_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_ICON_BG)
            .to_string();
        ProductIcon::Placeholder { letter, background }
    }

    /// Image source: the remote URL, or an inline SVG data URI
    pub fn src(&self) -> String {
        match self {
            ProductIcon::Remote(url) => url.clone(),
            ProductIcon::Placeholder { letter, background } => {
                let svg = html! {
                    svg xmlns="http://www.w3.org/2000/svg" width=(ICON_SIZE) height=(ICON_SIZE) {
                        rect width=(ICON_SIZE) height=(ICON_SIZE) rx="8" fill=(background) {}
                        text x="50%" y="50%" dy=".35em" text-anchor="middle"
                            font-family="sans-serif" font-size="22" fill="#ffffff" {
                            (letter)
                        }
                    }
                };
                format!("data:image/svg+xml,{}", urlencoding::encode(&svg.into_string()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub icon: ProductIcon,
}

impl ProductCard {
    pub fn new(product: &ProductSummary, formatter: &Formatter) -> Self {
        Self {
            name: product.display_name().to_string(),
            price: product
                .price
                .map(|p| formatter.currency(p))
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            icon: ProductIcon::for_product(product),
        }
    }

    pub fn markup(&self) -> Markup {
        html! {
            div class="product-card" {
                div class="product-icon" {
                    img src=(self.icon.src()) alt=(self.name) width=(ICON_SIZE) height=(ICON_SIZE);
                }
                div class="product-info" {
                    div class="product-name" { (self.name) }
                    div class="product-price" { (self.price) }
                }
            }
        }
    }
}

pub fn update_products(
    surface: &mut dyn Surface,
    products: Option<&[ProductSummary]>,
    formatter: &Formatter,
) -> Result<SectionOutcome, SurfaceError> {
    surface.clear(ids::TOP_PRODUCTS)?;

    let products = products.unwrap_or_default();
    if products.is_empty() {
        let row = html! { div class="no-data" { (NOT_FOUND_TEXT) } };
        surface.append(ids::TOP_PRODUCTS, Node::new(EMPTY_ROW_CLASS, row))?;
        return Ok(SectionOutcome::Absent);
    }

    for product in products {
        let card = ProductCard::new(product, formatter);
        surface.append(ids::TOP_PRODUCTS, Node::new(PRODUCT_CARD_CLASS, card.markup()))?;
    }

    Ok(SectionOutcome::Rendered)
}

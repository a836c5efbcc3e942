//! Role-dependent price formatting

use autoparts_domain::{Money, Part};

/// Who is looking at the prices
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewer {
    /// Administrators also see the base price and the markup used
    pub is_admin: bool,

    /// Viewer-specific markup; `None` means the configured default
    pub markup_percent: Option<f64>,
}

impl Viewer {
    /// Anonymous visitor with the default markup
    pub fn guest() -> Self {
        Self::default()
    }

    /// Signed-in customer with a personal markup
    pub fn customer(markup_percent: f64) -> Self {
        Self {
            is_admin: false,
            markup_percent: Some(markup_percent),
        }
    }

    /// Administrator with the default markup
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            markup_percent: None,
        }
    }
}

/// A part with the prices a viewer may see
///
/// The wrapped `Part` is never modified, so its `base_price` stays the source
/// of every derived price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedPart {
    /// The catalog part
    pub part: Part,

    /// Price shown to the viewer (marked up)
    pub price: Money,

    /// Original price (administrators only)
    pub base_price: Option<Money>,

    /// Markup used (administrators only)
    pub markup_percent: Option<f64>,
}

/// Applies the markup percentage to base prices
///
/// Pure: the result depends only on the part's base price, the role and the
/// markup. Formatting an already formatted part gives the same price again.
///
/// # Examples
///
/// ```
/// use autoparts_domain::{Money, Part, PartId};
/// use autoparts_search::PriceFormatter;
///
/// let part = Part::new(PartId::new(1), "OC-90", "Oil filter", "Mahle", Money::from_cents(1000), 3);
/// let formatter = PriceFormatter::new(25.0);
///
/// let priced = formatter.format(&part, false, None);
/// assert_eq!(priced.price, Money::from_cents(1250));
/// assert_eq!(priced.base_price, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFormatter {
    default_markup_percent: f64,
}

impl PriceFormatter {
    /// Create a formatter with the markup used when none is supplied
    pub fn new(default_markup_percent: f64) -> Self {
        Self {
            default_markup_percent,
        }
    }

    /// Markup used when none is supplied
    pub fn default_markup_percent(&self) -> f64 {
        self.default_markup_percent
    }

    /// Price a part for a viewer role
    pub fn format(&self, part: &Part, is_admin: bool, markup_percent: Option<f64>) -> PricedPart {
        let markup = markup_percent.unwrap_or(self.default_markup_percent);
        let price = part.base_price.with_markup(markup);

        PricedPart {
            part: part.clone(),
            price,
            base_price: is_admin.then_some(part.base_price),
            markup_percent: is_admin.then_some(markup),
        }
    }

    /// Price a part for a viewer
    pub fn format_for(&self, part: &Part, viewer: &Viewer) -> PricedPart {
        self.format(part, viewer.is_admin, viewer.markup_percent)
    }
}

//! Marketplaces and their fixed column layouts.

use std::fmt;

use crate::error::{ModelError, Result};

/// Position of a column, either from the start of a row or from its end.
///
/// `FromEnd(1)` is the last column, matching a negative offset of `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRef {
    Index(usize),
    FromEnd(usize),
}

impl ColumnRef {
    /// Resolves the reference against a row arity.
    pub fn resolve(self, arity: usize) -> Option<usize> {
        match self {
            Self::Index(index) if index < arity => Some(index),
            Self::FromEnd(offset) if offset >= 1 && offset <= arity => Some(arity - offset),
            _ => None,
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::FromEnd(offset) => write!(f, "-{offset}"),
        }
    }
}

/// A numeric column whose parsed value must stay within `0.0..=max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedColumn {
    pub column: usize,
    pub max: f64,
}

/// Column offsets of one marketplace export.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    /// Documented column names, in file order.
    pub columns: &'static [&'static str],
    /// App name.
    pub name: usize,
    /// Review or rating count used to pick among duplicate rows.
    pub reviews: usize,
    /// Price, compared literally against the free sentinel.
    pub price: usize,
    /// Primary category used for frequency tables and averages.
    pub category: ColumnRef,
    /// Finer-grained genre column, when the export has one.
    pub genre: Option<ColumnRef>,
    /// Column measuring how many users an app has.
    pub popularity: usize,
    /// Star rating with a documented upper bound.
    pub rating: BoundedColumn,
    /// Whether the export carries repeated entries for the same app.
    pub deduplicate: bool,
}

impl ColumnLayout {
    pub fn arity(&self) -> usize {
        self.columns.len()
    }

    /// Resolves a column reference against this layout.
    pub fn resolve(&self, column: ColumnRef) -> Result<usize> {
        column
            .resolve(self.arity())
            .ok_or_else(|| ModelError::ColumnOutOfRange {
                column: column.to_string(),
                arity: self.arity(),
            })
    }

    pub fn column_name(&self, index: usize) -> Option<&'static str> {
        self.columns.get(index).copied()
    }
}

pub const GOOGLE_PLAY_LAYOUT: ColumnLayout = ColumnLayout {
    columns: &[
        "App",
        "Category",
        "Rating",
        "Reviews",
        "Size",
        "Installs",
        "Type",
        "Price",
        "Content Rating",
        "Genres",
        "Last Updated",
        "Current Ver",
        "Android Ver",
    ],
    name: 0,
    reviews: 3,
    price: 7,
    category: ColumnRef::Index(1),
    genre: Some(ColumnRef::FromEnd(4)),
    popularity: 5,
    rating: BoundedColumn {
        column: 2,
        max: 5.0,
    },
    deduplicate: true,
};

pub const APP_STORE_LAYOUT: ColumnLayout = ColumnLayout {
    columns: &[
        "id",
        "track_name",
        "size_bytes",
        "currency",
        "price",
        "rating_count_tot",
        "rating_count_ver",
        "user_rating",
        "user_rating_ver",
        "ver",
        "cont_rating",
        "prime_genre",
        "sup_devices.num",
        "ipadSc_urls.num",
        "lang.num",
        "vpp_lic",
    ],
    name: 1,
    reviews: 5,
    price: 4,
    category: ColumnRef::FromEnd(5),
    genre: None,
    popularity: 5,
    rating: BoundedColumn {
        column: 7,
        max: 5.0,
    },
    deduplicate: false,
};

/// The two app catalogs the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marketplace {
    GooglePlay,
    AppStore,
}

impl Marketplace {
    pub const ALL: [Marketplace; 2] = [Marketplace::GooglePlay, Marketplace::AppStore];

    pub fn layout(self) -> &'static ColumnLayout {
        match self {
            Self::GooglePlay => &GOOGLE_PLAY_LAYOUT,
            Self::AppStore => &APP_STORE_LAYOUT,
        }
    }

    /// Literal price string the export uses for free apps.
    pub fn free_price_sentinel(self) -> &'static str {
        match self {
            Self::GooglePlay => "0",
            Self::AppStore => "0.0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GooglePlay => "Google Play",
            Self::AppStore => "App Store",
        }
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

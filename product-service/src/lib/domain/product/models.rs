use std::fmt;

use chrono::DateTime;
use chrono::SubsecRound;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::product::errors::ProductIdError;
use crate::domain::product::errors::ProductValidationError;

/// Product aggregate entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: Price,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product with a fresh identifier and creation time.
    ///
    /// # Arguments
    /// * `name` - Validated product name
    /// * `price` - Validated price
    ///
    /// # Returns
    /// New product entity (not yet persisted)
    pub fn new(name: ProductName, price: Price) -> Self {
        Self {
            id: ProductId::new(),
            name,
            price,
            // Matches the microsecond precision of TIMESTAMPTZ
            created_at: Utc::now().trunc_subsecs(6),
        }
    }
}

/// Product unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(pub Uuid);

impl ProductId {
    /// Generate a new random product ID.
    ///
    /// # Returns
    /// ProductId with random UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a product ID from string.
    ///
    /// # Arguments
    /// * `s` - UUID string to parse
    ///
    /// # Returns
    /// Parsed ProductId
    ///
    /// # Errors
    /// * `Missing` - String is empty
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ProductIdError> {
        if s.trim().is_empty() {
            return Err(ProductIdError::Missing);
        }

        Uuid::parse_str(s)
            .map(ProductId)
            .map_err(|e| ProductIdError::InvalidFormat(e.to_string()))
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Product name value type. Must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductName(String);

impl ProductName {
    /// Create a new product name.
    ///
    /// # Errors
    /// * `EmptyName` - Name is empty or whitespace
    pub fn new(name: String) -> Result<Self, ProductValidationError> {
        if name.trim().is_empty() {
            return Err(ProductValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strictly positive, finite price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price(f64);

impl Price {
    /// Create a new price.
    ///
    /// # Errors
    /// * `PriceRequired` - Price is zero
    /// * `InvalidPrice` - Price is negative, NaN or infinite
    pub fn new(value: f64) -> Result<Self, ProductValidationError> {
        if value == 0.0 {
            return Err(ProductValidationError::PriceRequired);
        }
        if !value.is_finite() || value < 0.0 {
            return Err(ProductValidationError::InvalidPrice);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Command to create a new product.
#[derive(Debug)]
pub struct CreateProductCommand {
    pub name: ProductName,
    pub price: Price,
}

impl CreateProductCommand {
    /// Validate raw product input. Name is checked before price.
    ///
    /// # Errors
    /// * `EmptyName`, `PriceRequired`, `InvalidPrice`
    pub fn new(name: String, price: f64) -> Result<Self, ProductValidationError> {
        Ok(Self {
            name: ProductName::new(name)?,
            price: Price::new(price)?,
        })
    }
}

/// Command to replace a product's mutable fields.
///
/// Identifier and creation time are preserved.
#[derive(Debug)]
pub struct UpdateProductCommand {
    pub name: ProductName,
    pub price: Price,
}

impl UpdateProductCommand {
    /// Validate raw product input. Name is checked before price.
    ///
    /// # Errors
    /// * `EmptyName`, `PriceRequired`, `InvalidPrice`
    pub fn new(name: String, price: f64) -> Result<Self, ProductValidationError> {
        Ok(Self {
            name: ProductName::new(name)?,
            price: Price::new(price)?,
        })
    }
}

/// Ordering of product listings by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse a sort parameter. Anything other than `desc` sorts ascending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ASC",
            SortOrder::Descending => "DESC",
        }
    }
}

/// Page selection for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub size: u32,
}

impl Page {
    /// Rows to skip before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.number.saturating_sub(1)) * u64::from(self.size)
    }
}

/// Query describing which products to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListProductsQuery {
    pub page: Option<Page>,
    pub sort: SortOrder,
}

impl ListProductsQuery {
    /// Build a listing query from optional request parameters.
    ///
    /// Pagination applies only when both `page` and `limit` are at least 1.
    pub fn new(page: Option<u32>, limit: Option<u32>, sort: Option<&str>) -> Self {
        let page = match (page, limit) {
            (Some(number), Some(size)) if number >= 1 && size >= 1 => Some(Page { number, size }),
            _ => None,
        };

        Self {
            page,
            sort: SortOrder::parse(sort),
        }
    }
}

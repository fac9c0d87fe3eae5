/// Custom actions for catalog items.
///
/// Both actions answer with the resulting stock level so callers never need a
/// second round trip to read it back.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Replaces the stock level, e.g. after a delivery or a sale elsewhere.
    #[allow(dead_code)]
    SetStock(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogActionResult {
    StockLevel(crate::domain::Stock),
}

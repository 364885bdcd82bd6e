use log::debug;

use crate::config::ProductOptions;
use crate::product::StickerFinalDetails;

/// Price of the smallest, cheapest sticker before any factor is applied
pub const BASE_PRICE: f64 = 2.00;
/// Complexity surcharge per design element
pub const COMPLEXITY_PER_ELEMENT: f64 = 0.1;
/// Floor price per sticker
pub const MIN_UNIT_PRICE: f64 = 0.50;

/// Derives the estimated price of a design from its product options
pub struct PricingCalculator<'a> {
    options: &'a ProductOptions,
}

impl<'a> PricingCalculator<'a> {
    pub fn new(options: &'a ProductOptions) -> Self {
        Self { options }
    }

    /// Price factor of the named size, falling back to the first configured size
    pub fn size_price_factor(&self, name: Option<&str>) -> f64 {
        name.and_then(|name| self.options.size(name))
            .or_else(|| self.options.sizes.first())
            .map(|size| size.price_factor)
            .unwrap_or(1.0)
    }

    /// Price factor of the material value, falling back to the first configured material
    pub fn material_price_factor(&self, value: &str) -> f64 {
        self.options
            .material(value)
            .or_else(|| self.options.materials.first())
            .map(|material| material.price_factor)
            .unwrap_or(1.0)
    }

    /// `max(0.50 × quantity, 2.00 × size × material × (1 + 0.1 × elements) × quantity)`
    pub fn estimate(&self, element_count: usize, details: &StickerFinalDetails) -> f64 {
        let complexity_factor = 1.0 + COMPLEXITY_PER_ELEMENT * element_count as f64;
        let base = BASE_PRICE
            * self.size_price_factor(details.size.name.as_deref())
            * self.material_price_factor(&details.material);

        let quantity = f64::from(details.quantity);
        let raw_price = base * complexity_factor * quantity;
        let price = raw_price.max(MIN_UNIT_PRICE * quantity);

        debug!(
            "💲 Price estimate: {} elements, qty {} -> {:.2}",
            element_count, details.quantity, price
        );
        price
    }
}

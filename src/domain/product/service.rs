use super::entity::Product;
use super::errors::ProductError;

pub struct ProductService;

impl ProductService {
    /// Raises every price by `percentage` percent.
    pub fn increase_price(products: &mut [Product], percentage: f64) -> Result<(), ProductError> {
        for product in products.iter_mut() {
            let price = product.price() * (1.0 + percentage / 100.0);
            product.change_price(price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_price_of_all_products() {
        let mut products = vec![
            Product::new("p1", "Product 1", 10.0).unwrap(),
            Product::new("p2", "Product 2", 20.0).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100.0).unwrap();

        assert_eq!(products[0].price(), 20.0);
        assert_eq!(products[1].price(), 40.0);
    }
}

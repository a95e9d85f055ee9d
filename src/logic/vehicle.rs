use crate::state::{Product, SavedVehicle};

/// What: Decide whether a product fits one saved vehicle.
///
/// Inputs:
/// - `product`: Candidate product
/// - `vehicle`: Saved vehicle
///
/// Output:
/// - `true` when the vehicle's model is empty or equals the product's model.
///
/// Details:
/// - Year, make and trim are carried by `SavedVehicle` but not compared.
#[must_use]
pub fn fits_vehicle(product: &Product, vehicle: &SavedVehicle) -> bool {
    vehicle.model.is_empty() || product.model.as_deref() == Some(vehicle.model.as_str())
}

/// What: Keep only products compatible with at least one saved vehicle.
///
/// Inputs:
/// - `products`: Already filtered products
/// - `vehicles`: Saved vehicles; empty disables the predicate
///
/// Output:
/// - Surviving products in their original relative order.
#[must_use]
pub fn retain_compatible(mut products: Vec<Product>, vehicles: &[SavedVehicle]) -> Vec<Product> {
    if vehicles.is_empty() {
        return products;
    }
    products.retain(|p| vehicles.iter().any(|v| fits_vehicle(p, v)));
    products
}

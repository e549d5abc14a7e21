/// Alias to a scalar floating type used for costs and quantities.
pub type Float = f64;

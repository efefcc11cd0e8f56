pub mod revenue_model;

pub use revenue_model::IRevenueModel;

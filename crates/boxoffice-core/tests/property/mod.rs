mod format_properties;
mod forecast_properties;

//! Current-conditions snapshot returned by the weather provider

/// Current weather observation; any field may be omitted by the provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSnapshot {
    /// Air temperature at 2 m in Celsius
    pub temperature_c: Option<f64>,
    /// Mean wind speed at 10 m in km/h
    pub wind_speed_kmh: Option<f64>,
    /// Wind gusts at 10 m in km/h
    pub wind_gust_kmh: Option<f64>,
    /// Wind direction at 10 m in degrees (0-360, where 0/360 is North)
    pub wind_direction_deg: Option<f64>,
}

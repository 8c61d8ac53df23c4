//! Types related to motion sensors.

input_enum! {
    /// Sensor type.
    pub enum SensorType {
        /// Measures the raw acceleration (m/s^2).
        Accelerometer,
        /// Measures the raw rotation rates (radians/s).
        Gyroscope,
        /// Measures the ambient magnetic field (micro-teslas).
        Magnetometer,
        /// Measures the direction and intensity of gravity, independent of device acceleration (m/s^2).
        Gravity,
        /// Measures the direction and intensity of device acceleration, independent of the gravity (m/s^2).
        UserAcceleration,
        /// Measures the absolute 3D orientation (degrees).
        Orientation,
    }
}

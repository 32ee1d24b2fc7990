//! [`Handler`] and [`Query`] abstractions.

/// Executable handler, allowed to mutate its executor.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Whenever the execution fails, as defined by the implementor.
    fn execute(&mut self, args: Args) -> Result<Self::Ok, Self::Err>;
}

/// Read-only handler, never mutating its executor.
pub trait Query<Args = ()> {
    /// Type of successful [`Query`] result.
    type Ok;

    /// Type of this [`Query`] error.
    type Err;

    /// Executes this [`Query`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Whenever the query fails, as defined by the implementor.
    fn query(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}

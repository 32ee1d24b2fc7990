//! [`Command`] for choosing the [`MapType`].

use tracerr::Traced;
use tracing as log;

use crate::{domain::filter::MapType, infra::Views, Service};

use super::{Change, Command, ExecutionError};

/// [`Command`] choosing the [`MapType`] of the choropleth.
///
/// Choosing the active [`MapType`] again resets it to [`MapType::None`].
#[derive(Clone, Copy, Debug)]
pub struct SetMapType(pub MapType);

impl<V: Views> Command<SetMapType> for Service<V> {
    type Ok = Change;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: SetMapType) -> Result<Self::Ok, Self::Err> {
        let SetMapType(option) = cmd;

        let before = self.state.map_type();
        let after = self.state.set_map_type(option);
        log::debug!("`MapType` switched from `{before}` to `{after}`");

        self.refresh(Change::MapType.or_unchanged(before != after))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
    }
}

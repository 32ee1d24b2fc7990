//! [`Command`] for toggling a set-valued filter.

use derive_more::From;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::listing::{condition, AdsType, District},
    infra::Views,
    Service,
};

use super::{Change, Command, ExecutionError};

/// [`Command`] selecting a value of a set-valued filter, or deselecting it if
/// it's selected already.
#[derive(Clone, Debug, From)]
pub enum Toggle {
    /// Toggles a [`District`].
    District(District),

    /// Toggles an [`AdsType`].
    AdsType(AdsType),

    /// Toggles a [`condition::Kind`].
    Condition(condition::Kind),
}

impl<V: Views> Command<Toggle> for Service<V> {
    type Ok = Change;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: Toggle) -> Result<Self::Ok, Self::Err> {
        log::debug!("Toggling {cmd:?}");

        let change = match cmd {
            Toggle::District(d) => {
                _ = self.state.toggle_district(d);
                Change::Selection
            }
            Toggle::AdsType(t) => {
                _ = self.state.toggle_ads_type(t);
                Change::Category
            }
            Toggle::Condition(c) => {
                _ = self.state.toggle_condition(c);
                Change::Category
            }
        };

        self.refresh(change)
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
    }
}

//! [`Command`] for changing the [`Years`] horizon.

use tracerr::Traced;
use tracing as log;

use crate::{domain::filter::Years, infra::Views, Service};

use super::{Change, Command, ExecutionError};

/// [`Command`] changing the [`Years`] horizon rent prices are brought to.
///
/// Every other filter is preserved, while prices are rescaled and re-checked
/// against the price range.
#[derive(Clone, Copy, Debug)]
pub struct SetYears(pub Years);

impl<V: Views> Command<SetYears> for Service<V> {
    type Ok = Change;
    type Err = Traced<ExecutionError>;

    fn execute(&mut self, cmd: SetYears) -> Result<Self::Ok, Self::Err> {
        let SetYears(years) = cmd;

        let changed = self.state.set_years(years);
        if changed {
            log::debug!("Horizon set to {years} years");
        }

        self.refresh(Change::Subset.or_unchanged(changed))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
    }
}

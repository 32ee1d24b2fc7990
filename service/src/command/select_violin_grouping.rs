//! [`Command`] for selecting the violin plot [`Grouping`].

use tracerr::Traced;
use tracing as log;

use crate::{domain::filter::Grouping, infra::Views, Service};

use super::{Change, Command, ExecutionError};

/// [`Command`] selecting the dimension the violin plot is split by.
#[derive(Clone, Copy, Debug)]
pub struct SelectViolinGrouping(pub Grouping);

impl<V: Views> Command<SelectViolinGrouping> for Service<V> {
    type Ok = Change;
    type Err = Traced<ExecutionError>;

    fn execute(
        &mut self,
        cmd: SelectViolinGrouping,
    ) -> Result<Self::Ok, Self::Err> {
        let SelectViolinGrouping(grouping) = cmd;

        let changed = self.state.set_grouping(grouping);
        if changed {
            log::debug!("Violin plot grouped by `{grouping}`");
        }

        self.refresh(Change::Grouping.or_unchanged(changed))
            .map_err(tracerr::map_from_and_wrap!(=> ExecutionError))
    }
}

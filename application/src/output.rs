//! [`JsonLines`] view definitions.

use std::io::Write;

use common::operations::{Draw, Highlight};
use serde::Serialize;
use service::{
    infra::{view, View},
    read::{Choropleth, ParallelCoordinates, Selection, ViolinPlot},
};
use tracerr::Traced;

/// [`View`] writing every payload as a single JSON line.
///
/// Each line is an object of the `view` [`view::Kind`] and its `payload`.
#[derive(Debug)]
pub struct JsonLines<W> {
    /// Writer the lines go to.
    writer: W,
}

impl<W: Write> JsonLines<W> {
    /// Creates a new [`JsonLines`] view writing into the provided `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes the provided `payload` of the given [`view::Kind`] as a line.
    fn write<T: Serialize>(
        &mut self,
        view: view::Kind,
        payload: &T,
    ) -> Result<(), Traced<view::Error>> {
        /// Single line of output.
        #[derive(Serialize)]
        struct Line<'a, T> {
            /// [`view::Kind`] the payload is meant for.
            view: view::Kind,

            /// Payload itself.
            payload: &'a T,
        }

        serde_json::to_writer(&mut self.writer, &Line { view, payload })
            .map_err(|e| e.to_string())
            .and_then(|()| {
                self.writer
                    .write_all(b"\n")
                    .and_then(|()| self.writer.flush())
                    .map_err(|e| e.to_string())
            })
            .map_err(|reason| tracerr::new!(view::Error::Render { view, reason }))
    }
}

impl<W: Write> View<Draw<ParallelCoordinates>> for JsonLines<W> {
    type Ok = ();
    type Err = Traced<view::Error>;

    fn execute(
        &mut self,
        Draw(payload): Draw<ParallelCoordinates>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(view::Kind::ParallelCoordinates, &payload)
    }
}

impl<W: Write> View<Draw<ViolinPlot>> for JsonLines<W> {
    type Ok = ();
    type Err = Traced<view::Error>;

    fn execute(
        &mut self,
        Draw(payload): Draw<ViolinPlot>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(view::Kind::ViolinPlot, &payload)
    }
}

impl<W: Write> View<Draw<Choropleth>> for JsonLines<W> {
    type Ok = ();
    type Err = Traced<view::Error>;

    fn execute(
        &mut self,
        Draw(payload): Draw<Choropleth>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(view::Kind::Choropleth, &payload)
    }
}

impl<W: Write> View<Highlight<Selection>> for JsonLines<W> {
    type Ok = ();
    type Err = Traced<view::Error>;

    fn execute(
        &mut self,
        Highlight(payload): Highlight<Selection>,
    ) -> Result<Self::Ok, Self::Err> {
        self.write(view::Kind::Selection, &payload)
    }
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use common::operations::Highlight;
    use service::{
        domain::listing::District,
        infra::View as _,
        read::Selection,
    };

    use super::JsonLines;

    #[test]
    fn writes_one_line_per_payload() {
        let mut view = JsonLines::new(Vec::new());
        let selection = Selection {
            districts: BTreeSet::from([District::new("Porto").unwrap()]),
        };

        view.execute(Highlight(selection.clone())).unwrap();
        view.execute(Highlight(selection)).unwrap();

        let out = String::from_utf8(view.into_inner()).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            r#"{"view":"Selection","payload":{"districts":["Porto"]}}"#,
        );
    }
}

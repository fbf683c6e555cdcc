// cli.rs - Command Line Parsing
//
// prog x y width height #RRGGBB [t:r:b:l]

use crate::color::{self, ColorPair};
use crate::error::FrameError;
use crate::geometry::{self, BorderSegment, BorderWidths, SegmentRect, TargetRect};

/// Everything the overlay needs, validated before the display is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub target: TargetRect,
    pub widths: BorderWidths,
    pub colors: ColorPair,
}

impl Invocation {
    pub fn layout(&self) -> [SegmentRect; 4] {
        geometry::layout(self.target, self.widths)
    }
}

/// Parse the full argument vector, program name included.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, FrameError> {
    let program = args.first().map(|s| s.as_ref()).unwrap_or(env!("CARGO_PKG_NAME"));
    let usage = || FrameError::usage(program);

    let args: Vec<&str> = args.iter().skip(1).map(|s| s.as_ref()).collect();
    if args.iter().any(|a| *a == "-h" || *a == "--help") {
        return Err(usage());
    }

    let (x, y, width, height, hex, border) = match args.as_slice() {
        &[x, y, w, h, hex] => (x, y, w, h, hex, None),
        &[x, y, w, h, hex, border] => (x, y, w, h, hex, Some(border)),
        _ => return Err(usage()),
    };

    let target = TargetRect::new(
        x.parse().map_err(|_| usage())?,
        y.parse().map_err(|_| usage())?,
        width.parse().map_err(|_| usage())?,
        height.parse().map_err(|_| usage())?,
    );
    let colors = color::parse_color(hex)?;
    let widths = match border {
        Some(spec) => BorderWidths::parse(spec)?,
        None => BorderWidths::default(),
    };

    let invocation = Invocation { target, widths, colors };
    for (segment, rect) in BorderSegment::ALL.into_iter().zip(invocation.layout()) {
        if !rect.fits_x11() {
            return Err(FrameError::Geometry(format!(
                "{} segment {}x{}+{}+{}",
                segment.name(),
                rect.width,
                rect.height,
                rect.x,
                rect.y
            )));
        }
    }

    Ok(invocation)
}

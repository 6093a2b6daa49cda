use crate::{
    error::Error,
    seed::{Fill, FillMode},
};
use std::str::FromStr;

/// Default edge length of a generated fill
const DEFAULT_FILL_SIZE: i64 = 16;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("t", "threads", "classify cells on the rayon thread pool");
        opts.optopt("o", "output", "also write the next generation to a file", "FILE");
        opts.optopt("i", "input", "read the initial cells from a file", "FILE");
        opts.optopt("f", "fill", "generate the initial cells (random, alternating, all, empty)", "TYPE");
        opts.optopt("w", "width", "set fill width", "WIDTH");
        opts.optopt("h", "height", "set fill height", "HEIGHT");
        opts.optopt("g", "gens", "number of generations to advance", "COUNT");
        opts
    }

    /// Parses the arguments, returning `None` if only the usage was requested
    pub fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, Error> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: sparselife [options]"));
            Ok(None)
        } else {
            Ok(Some(Self { matches }))
        }
    }
    pub fn from_env() -> Result<Option<Self>, Error> {
        let env = std::env::args().skip(1).collect::<Vec<_>>();
        Self::new(&env)
    }

    fn get<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, Error> {
        self.matches.opt_get(name).map_err(|_| Error::InvalidValue {
            name,
            value: self.matches.opt_str(name).unwrap_or_default(),
        })
    }

    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn generations(&self) -> Result<usize, Error> {
        Ok(self.get("gens")?.unwrap_or(1))
    }

    /// Width and height of the fill box, rejecting boxes that can't be counted
    pub fn fill_size(&self) -> Result<(i64, i64), Error> {
        let w = self.get("width")?.unwrap_or(DEFAULT_FILL_SIZE);
        let h = self.get("height")?.unwrap_or(DEFAULT_FILL_SIZE);
        if Fill::new(FillMode::Empty, w, h).is_none() {
            return Err(Error::InvalidValue {
                name: if h < 0 { "height" } else { "width" },
                value: format!("{w}x{h}"),
            });
        }
        Ok((w, h))
    }
    pub fn fill_mode(&self) -> Result<Option<FillMode>, Error> {
        self.matches.opt_str("fill").map(|mode| mode.parse()).transpose()
    }
    pub fn fill(&self) -> Result<Option<Fill>, Error> {
        let Some(mode) = self.fill_mode()? else {
            return Ok(None);
        };
        let (w, h) = self.fill_size()?;
        // fill_size already checked the box
        Ok(Fill::new(mode, w, h))
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
}

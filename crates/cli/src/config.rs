use crate::args::Args;
use tree_tally_engine::{EngineError, ErrorPolicy, ScanConfig, ScanConfigBuilder};

impl TryFrom<&Args> for ScanConfig {
    type Error = EngineError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let on_error = if args.keep_going {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::FailFast
        };

        // The binary narrates unless asked not to; the library default is quiet.
        let config = ScanConfigBuilder::default()
            .root(args.path.clone())
            .verbose(!args.quiet)
            .follow_links(args.follow)
            .on_error(on_error)
            .build()?;
        Ok(config)
    }
}

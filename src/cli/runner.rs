use tracing::info;

use maskblend::core::params::CompositeParams;
use maskblend::io::paths::split_path_list;
use maskblend::{EncodeProfile, composite_to_path};

use super::args::CliArgs;
use super::errors::AppError;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let background = args.background.ok_or(AppError::MissingArgument {
        arg: "--background".to_string(),
    })?;
    let overlay = args.overlay.ok_or(AppError::MissingArgument {
        arg: "--overlay".to_string(),
    })?;
    let output = args.output.ok_or(AppError::MissingArgument {
        arg: "--output".to_string(),
    })?;

    if args.normalize < 0.0 {
        return Err(AppError::NegativeLevel {
            level: args.normalize,
        }
        .into());
    }

    let encode = if args.fast {
        EncodeProfile::Fast
    } else {
        args.encode
    };

    let params = CompositeParams {
        masks: split_path_list(args.masks.as_deref()),
        invert_masks: split_path_list(args.invert_masks.as_deref()),
        save_mask: args.save_mask,
        normalize_level: args.normalize,
        encode,
    };

    composite_to_path(&background, &overlay, &output, &params)?;
    info!("successfully composited: {:?} -> {:?}", background, output);

    Ok(())
}

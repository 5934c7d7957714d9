//! Avatar command - Prints a Gravatar image tag.

use crate::cli::args::AvatarArgs;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::GravatarHelper;

/// Execute the avatar command
pub fn execute(args: AvatarArgs, config: &Config) -> AppResult<()> {
    let helper = GravatarHelper::new(config.avatar_size);
    println!("{}", helper.process(&args.email, args.size));
    Ok(())
}

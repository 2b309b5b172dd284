/// Invoker - prints the account name of the user invoking this process
use invoker::error::InvokerResult;
use invoker::{IdentityResolver, IdentityResolverConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> InvokerResult<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "invoker=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = IdentityResolverConfig::from_env()?;

    let resolver = IdentityResolver::new(config);
    match resolver.resolve_current_user() {
        Some(name) => println!("{}", name),
        None => {
            // Unknown user is a valid resolution result; the CLI maps it to
            // an exit status rather than an error.
            std::process::exit(1);
        }
    }

    Ok(())
}

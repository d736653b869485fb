//! Local scoring command handler.

use std::path::Path;

use attrsim_core::{
    load_model_config, AppConfig, AttributionModelConfig, MarketingChannel, SimulationParameters,
};
use attrsim_model::{feature_contributions, impact_delta, predict};

/// Hypothetical shopper profile shared by the scoring commands.
#[derive(Debug, clap::Args)]
pub struct ProfileArgs {
    /// Acquisition channel (Ad, Email, or Influencer)
    #[arg(long, default_value = "Ad")]
    pub channel: String,
    /// Product views during the session
    #[arg(long, default_value_t = 3.0)]
    pub product_views: f64,
    /// Perceived image quality (nominal range 1-5)
    #[arg(long, default_value_t = 3.0)]
    pub image_quality: f64,
    /// Reviews read during the session
    #[arg(long, default_value_t = 20.0)]
    pub review_count: f64,
    /// Seconds spent on the product page
    #[arg(long, default_value_t = 120.0)]
    pub time_spent_on_page: f64,
}

impl ProfileArgs {
    /// Convert the raw flags into simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel name is not recognized.
    pub(crate) fn to_params(&self) -> anyhow::Result<SimulationParameters> {
        let marketing_channel: MarketingChannel = self.channel.parse()?;
        Ok(SimulationParameters {
            marketing_channel,
            product_views: self.product_views,
            image_quality: self.image_quality,
            review_count: self.review_count,
            time_spent_on_page: self.time_spent_on_page,
        })
    }
}

/// Resolve the model configuration from an explicit flag, the configured
/// weights file, or the built-in defaults, in that order.
///
/// # Errors
///
/// Returns an error if a weights file is named but cannot be loaded.
pub(crate) fn load_weights(
    config: &AppConfig,
    override_path: Option<&Path>,
) -> anyhow::Result<AttributionModelConfig> {
    match override_path.or(config.weights_path.as_deref()) {
        Some(path) => Ok(load_model_config(path)?),
        None => Ok(AttributionModelConfig::default()),
    }
}

/// Score a profile with the closed-form model and report the breakdown.
///
/// # Errors
///
/// Returns an error if the channel or the weights file is invalid.
pub(crate) fn run_simulate(
    config: &AppConfig,
    profile: &ProfileArgs,
    weights: Option<&Path>,
) -> anyhow::Result<()> {
    let model_config = load_weights(config, weights)?;
    let params = profile.to_params()?;

    let probability = predict(&params, &model_config);
    let contributions = feature_contributions(&params, &model_config);
    let baseline = SimulationParameters::default();
    let delta = impact_delta(&baseline, &params, &model_config);

    println!("model: {}", model_config.model_type);
    println!("channel: {}", params.marketing_channel);
    println!("predicted conversion: {}", crate::percent(probability));
    println!("impact vs default profile: {}", crate::signed_percent(delta));
    println!();

    let header = format!("{:<22}SHARE", "FEATURE");
    println!("{header}");
    for (feature, share) in contributions.ranked() {
        println!("{:<22}{}", feature.label(), crate::percent(share));
    }

    Ok(())
}

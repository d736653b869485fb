//! Train, evaluate, and predict calls against the remote service.

use std::collections::HashMap;
use std::path::Path;

use attrsim_core::AppConfig;
use attrsim_mlclient::{MlClientError, MlService};
use attrsim_model::predict;

use crate::simulate::ProfileArgs;

/// Train the remote model on a freshly generated dataset.
///
/// # Errors
///
/// Returns an error if the service rejects the request or the transport
/// fails.
pub(crate) async fn run_remote_train(
    config: &AppConfig,
    service: &dyn MlService,
    count: Option<usize>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let records = crate::generate::generate_batch(count.unwrap_or(config.dataset_size), seed);
    match service.train(&records).await {
        Ok(response) => {
            if response.success {
                println!("trained on {} records", records.len());
            } else {
                println!(
                    "training rejected: {}",
                    message_or_default(response.message)
                );
            }
            if let Some(importances) = response.feature_importances {
                println!();
                print_value_table("IMPORTANCE", &importances);
            }
            Ok(())
        }
        Err(MlClientError::Disabled) => {
            super::print_disabled_notice();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Evaluate the remote model on a freshly generated dataset.
///
/// # Errors
///
/// Returns an error if the service rejects the request or the transport
/// fails.
pub(crate) async fn run_remote_evaluate(
    config: &AppConfig,
    service: &dyn MlService,
    count: Option<usize>,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let records = crate::generate::generate_batch(count.unwrap_or(config.dataset_size), seed);
    match service.evaluate(&records).await {
        Ok(response) => {
            if !response.success {
                println!(
                    "evaluation rejected: {}",
                    message_or_default(response.message)
                );
                return Ok(());
            }
            match response.metrics {
                Some(metrics) => {
                    println!("evaluated on {} records", records.len());
                    println!("accuracy:  {:.3}", metrics.accuracy);
                    println!("precision: {:.3}", metrics.precision);
                    println!("recall:    {:.3}", metrics.recall);
                    println!("f1:        {:.3}", metrics.f1);
                    println!("auc:       {:.3}", metrics.auc);
                }
                None => println!("service reported success without metrics"),
            }
            Ok(())
        }
        Err(MlClientError::Disabled) => {
            super::print_disabled_notice();
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Score a profile remotely and print it next to the local model's answer.
///
/// # Errors
///
/// Returns an error if the channel or the weights file is invalid, or if the
/// transport fails.
pub(crate) async fn run_remote_predict(
    config: &AppConfig,
    service: &dyn MlService,
    profile: &ProfileArgs,
    weights: Option<&Path>,
) -> anyhow::Result<()> {
    let params = profile.to_params()?;
    let model_config = crate::simulate::load_weights(config, weights)?;
    let local = predict(&params, &model_config);

    match service.predict(&params).await {
        Ok(response) => {
            if !response.success {
                println!(
                    "prediction rejected: {}",
                    message_or_default(response.message)
                );
                println!("local model: {}", crate::percent(local));
                return Ok(());
            }
            match response.prediction {
                Some(remote) => {
                    println!("remote model: {}", crate::percent(remote));
                    println!("local model:  {}", crate::percent(local));
                    println!("difference:   {}", crate::signed_percent(remote - local));
                }
                None => {
                    println!("service reported success without a prediction");
                    println!("local model: {}", crate::percent(local));
                }
            }
            if let Some(contributions) = response.feature_contributions {
                println!();
                print_value_table("CONTRIBUTION", &contributions);
            }
            Ok(())
        }
        Err(MlClientError::Disabled) => {
            super::print_disabled_notice();
            println!("local model: {}", crate::percent(local));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn message_or_default(message: Option<String>) -> String {
    message.unwrap_or_else(|| "no detail given".to_string())
}

/// Print feature/value pairs sorted by descending value.
fn print_value_table(value_header: &str, values: &HashMap<String, f64>) {
    let mut rows: Vec<(&str, f64)> = values
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();
    rows.sort_by(|a, b| b.1.total_cmp(&a.1));

    let header = format!("{:<22}{value_header}", "FEATURE");
    println!("{header}");
    for (name, value) in rows {
        println!("{name:<22}{value:.3}");
    }
}

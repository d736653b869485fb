//! Availability probe.

use attrsim_mlclient::MlService;

/// Report whether the remote service is reachable and holds a trained model.
pub(crate) async fn run_remote_status(service: &dyn MlService) -> anyhow::Result<()> {
    let status = service.status().await;
    if status.available {
        println!("remote scoring service: available");
        println!(
            "remote model: {}",
            if status.model_trained {
                "trained"
            } else {
                "not trained"
            }
        );
    } else {
        println!("remote scoring service: unavailable");
        println!("the local closed-form model remains authoritative");
    }
    Ok(())
}

//! Execution provider selection.

use crate::config::InferenceDevice;
use ort::execution_providers::ExecutionProviderDispatch;
use tracing::{info, warn};

#[cfg(feature = "cuda")]
fn cuda_provider() -> Option<ExecutionProviderDispatch> {
    use ort::execution_providers::{CUDAExecutionProvider, ExecutionProvider};

    let provider = CUDAExecutionProvider::default();
    if provider.is_available().unwrap_or(false) {
        Some(provider.build())
    } else {
        None
    }
}

#[cfg(not(feature = "cuda"))]
fn cuda_provider() -> Option<ExecutionProviderDispatch> {
    None
}

/// Providers to register for a device setting, plus a label for logs.
///
/// ONNX Runtime always falls back to CPU for anything the registered
/// providers cannot run.
pub(crate) fn execution_providers(
    device: InferenceDevice,
) -> (Vec<ExecutionProviderDispatch>, &'static str) {
    match device {
        InferenceDevice::Cpu => {
            info!("Requested device: CPU");
            (Vec::new(), "CPU")
        }
        InferenceDevice::Auto => match cuda_provider() {
            Some(provider) => {
                info!("Auto mode: CUDA available, attempting GPU");
                (vec![provider], "CUDA")
            }
            None => {
                info!("Auto mode: No GPU providers available, using CPU");
                (Vec::new(), "Auto (CPU)")
            }
        },
        InferenceDevice::Gpu => match cuda_provider() {
            Some(provider) => {
                info!("--gpu: Selected CUDA provider");
                (vec![provider], "CUDA")
            }
            None => {
                warn!("--gpu requested but no GPU providers available, using CPU");
                (Vec::new(), "GPU (fallback to CPU)")
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_registers_no_providers() {
        let (providers, label) = execution_providers(InferenceDevice::Cpu);
        assert!(providers.is_empty());
        assert_eq!(label, "CPU");
    }
}

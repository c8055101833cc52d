use candle_core::{CudaDevice, DType, Device};

use crate::error::{IntentError, Result};

/// Where model inference should run.
#[derive(Debug, Clone, Default)]
pub enum DeviceRequest {
    /// Run on the CPU (default).
    #[default]
    Cpu,
    /// Run on a specific CUDA GPU.
    Cuda(usize),
}

impl DeviceRequest {
    /// Picks CUDA device 0 when the build and host support it, CPU otherwise.
    pub fn auto() -> Self {
        if candle_core::utils::cuda_is_available() {
            DeviceRequest::Cuda(0)
        } else {
            DeviceRequest::Cpu
        }
    }

    pub(crate) fn resolve(self) -> Result<Device> {
        match self {
            DeviceRequest::Cpu => Ok(Device::Cpu),
            DeviceRequest::Cuda(i) => {
                CudaDevice::new_with_stream(i)
                    .map(Device::Cuda)
                    .map_err(|e| {
                        IntentError::Device(format!(
                            "Failed to init CUDA device {i}: {e}. Try CPU as fallback."
                        ))
                    })
            }
        }
    }
}

/// Numeric precision for model weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precision {
    /// 32-bit floats (default; works on every device).
    #[default]
    Full,
    /// 16-bit floats. Halves weight memory; best paired with an accelerator.
    Half,
}

impl Precision {
    pub(crate) fn dtype(self) -> DType {
        match self {
            Precision::Full => DType::F32,
            Precision::Half => DType::F16,
        }
    }
}

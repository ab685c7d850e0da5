//! Diagnostic CPU feature report.
//!
//! Nothing here changes how data is encoded: every codec runs the same
//! portable scalar code on every machine. The report exists so bug reports
//! can say what hardware they came from.

use std::fmt;
use std::sync::OnceLock;

/// Processor identification and the instruction-set extensions of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuFeatures {
    pub vendor: String,
    pub brand: String,
    pub sse42: bool,
    pub avx2: bool,
    pub bmi1: bool,
    pub bmi2: bool,
    pub neon: bool,
}

static CPU_FEATURES: OnceLock<CpuFeatures> = OnceLock::new();

/// Detected features of the running processor (cached after first call).
pub fn cpu_features() -> &'static CpuFeatures {
    CPU_FEATURES.get_or_init(|| {
        let features = CpuFeatures::detect();
        log::debug!("detected cpu: {features:?}");
        features
    })
}

impl CpuFeatures {
    #[cfg(target_arch = "x86_64")]
    fn detect() -> Self {
        let (vendor, brand) = x86::identify();
        CpuFeatures {
            vendor,
            brand,
            sse42: is_x86_feature_detected!("sse4.2"),
            avx2: is_x86_feature_detected!("avx2"),
            bmi1: is_x86_feature_detected!("bmi1"),
            bmi2: is_x86_feature_detected!("bmi2"),
            neon: false,
        }
    }

    #[cfg(target_arch = "aarch64")]
    fn detect() -> Self {
        CpuFeatures {
            vendor: String::from("unknown"),
            brand: String::from("unknown"),
            neon: std::arch::is_aarch64_feature_detected!("neon"),
            ..CpuFeatures::default()
        }
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    fn detect() -> Self {
        CpuFeatures {
            vendor: String::from("unknown"),
            brand: String::from("unknown"),
            ..CpuFeatures::default()
        }
    }

    /// Name of the code path the codecs run on.
    pub fn code_path(&self) -> &'static str {
        "portable scalar"
    }
}

#[cfg(target_arch = "x86_64")]
mod x86 {
    use std::arch::x86_64::{__cpuid, CpuidResult};

    #[allow(unused_unsafe)]
    fn cpuid(leaf: u32) -> CpuidResult {
        // SAFETY: CPUID is available on every x86_64 processor.
        unsafe { __cpuid(leaf) }
    }

    fn registers_to_string(registers: &[u32]) -> String {
        let bytes: Vec<u8> = registers.iter().flat_map(|r| r.to_le_bytes()).collect();
        String::from_utf8_lossy(&bytes)
            .trim_matches(char::from(0))
            .trim()
            .to_string()
    }

    /// Vendor string from leaf 0 and brand string from leaves 0x80000002-4.
    pub(super) fn identify() -> (String, String) {
        let leaf0 = cpuid(0);
        let vendor = registers_to_string(&[leaf0.ebx, leaf0.edx, leaf0.ecx]);

        let brand = if cpuid(0x8000_0000).eax >= 0x8000_0004 {
            let registers: Vec<u32> = (0x8000_0002..=0x8000_0004)
                .map(cpuid)
                .flat_map(|r| [r.eax, r.ebx, r.ecx, r.edx])
                .collect();
            registers_to_string(&registers)
        } else {
            String::from("unknown")
        };

        (vendor, brand)
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

impl fmt::Display for CpuFeatures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "basex {}", crate::version())?;
        writeln!(f, "CPU:    {}", self.brand)?;
        writeln!(f, "Vendor: {}", self.vendor)?;
        writeln!(f, "Features:")?;
        writeln!(f, "  SSE4.2: {}", yes_no(self.sse42))?;
        writeln!(f, "  AVX2:   {}", yes_no(self.avx2))?;
        writeln!(f, "  BMI1:   {}", yes_no(self.bmi1))?;
        writeln!(f, "  BMI2:   {}", yes_no(self.bmi2))?;
        writeln!(f, "  NEON:   {}", yes_no(self.neon))?;
        write!(f, "Code path: {}", self.code_path())
    }
}

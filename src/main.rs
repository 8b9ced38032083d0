
use tcu::{Temperature, TemperatureUnit};
use tcu::literal::TemperatureLiteral;
use tcu::settings::DisplaySettings;
use tcu::util::write::stdout_sink;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .init();

  let settings = DisplaySettings::from_env()?;
  tracing::debug!(?settings, "loaded display settings");
  let mut out = stdout_sink();

  let zero = Temperature::from_celsius(0.0);
  for unit in TemperatureUnit::ALL {
    zero.emit_with(unit, &settings, &mut out)?;
  }

  // Displays in Celsius, the unit of the left operand.
  let sum = zero + 100_i32.celsius();
  sum.emit_with(sum.unit(), &settings, &mut out)?;

  assert!(100_i32.celsius() == 373.15_f64.kelvin(), "100 °C should equal 373.15 K");
  Ok(())
}

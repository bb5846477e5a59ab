// ============================================================================
// CONFIG - Configuración de la aplicación
// ============================================================================

use serde::{Deserialize, Serialize};

/// Configuración global, inyectada en tiempo de compilación vía build.rs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    /// ¿Estamos en producción?
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log según el entorno
    pub fn log_level(&self) -> log::Level {
        if self.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_development() {
        let config = AppConfig::default();
        assert!(!config.is_production());
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn production_raises_the_log_threshold() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert!(config.is_production());
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}

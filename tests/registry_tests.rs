//! Registry loading and configuration tests

use chemical_name_generator::config::AppConfig;
use chemical_name_generator::models::ChemicalElement;
use chemical_name_generator::registry::{ElementRegistry, RegistryError};
use std::fs;
use tempfile::TempDir;

mod load_file_tests {
    use super::*;

    #[test]
    fn test_load_flat_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elements.txt");
        fs::write(
            &path,
            "Element-Type:Ionic\nOxygen|O|-2|3.44\nLithium|Li|1|0.98|true\n\
             Element-Type:Transition\nCopper|Cu|2,1\n",
        )
        .unwrap();

        let registry = ElementRegistry::load_file(&path).unwrap();
        assert_eq!(registry.ionic().len(), 2);
        assert_eq!(registry.transition()[0].charges(), &[1, 2]);
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elements.yaml");
        fs::write(
            &path,
            r#"
- type: ionic
  name: Fluorine
  symbol: F
  charge: -1
  electronegativity: 3.98
- type: transition
  name: Silver
  symbol: Ag
  charges: [1]
"#,
        )
        .unwrap();

        let registry = ElementRegistry::load_file(&path).unwrap();
        assert!(matches!(registry.find("Ag"), Some(ChemicalElement::Transition(_))));
        assert!(!registry.ionic()[0].is_metal());
    }

    #[test]
    fn test_load_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elements.JSON");
        fs::write(
            &path,
            r#"[{"type": "ionic", "name": "Neon", "symbol": "Ne", "charge": 0, "electronegativity": 0.0}]"#,
        )
        .unwrap();

        let registry = ElementRegistry::load_file(&path).unwrap();
        assert!(registry.ionic()[0].is_neutral());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ElementRegistry::load_file(dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, RegistryError::Io { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elements.yml");
        fs::write(&path, "- type: noble\n  name: Xenon\n").unwrap();
        assert!(matches!(
            ElementRegistry::load_file(&path),
            Err(RegistryError::Yaml(_))
        ));
    }

    #[test]
    fn test_parse_error_has_hint() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elements.txt");
        fs::write(&path, "Element-Type:Ionic\nOxygen|O\n").unwrap();

        let err = ElementRegistry::load_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Line 2"));
        assert!(err.user_message().contains("Hint"));
    }
}

mod load_dir_tests {
    use super::*;

    #[test]
    fn test_load_dir_merges_files_in_name_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("b_transition.txt"),
            "Element-Type:Transition\nIron|Fe|2,3\nElement-Type:Ionic\nSulfur|S|-2|2.58\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("a_ionic.txt"),
            "Element-Type:Ionic\nOxygen|O|-2|3.44\nLithium|Li|1|0.98|true\n",
        )
        .unwrap();

        let registry = ElementRegistry::load_dir(dir.path()).unwrap();
        let ionic: Vec<&str> = registry.ionic().iter().map(|e| e.symbol()).collect();
        assert_eq!(ionic, ["O", "Li", "S"]);
        assert_eq!(registry.transition()[0].symbol(), "Fe");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_load_dir_mixes_formats() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("flat.txt"), "Element-Type:Ionic\nOxygen|O|-2|3.44\n").unwrap();
        fs::write(
            dir.path().join("metals.yaml"),
            "- type: transition\n  name: Copper\n  symbol: Cu\n  charges: [1, 2]\n",
        )
        .unwrap();

        let registry = ElementRegistry::load_dir(dir.path()).unwrap();
        assert!(matches!(registry.find("O"), Some(ChemicalElement::Ionic(_))));
        assert!(matches!(registry.find("Cu"), Some(ChemicalElement::Transition(_))));
    }

    #[test]
    fn test_load_dir_skips_hidden_files_and_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("elements.txt"), "Element-Type:Ionic\nOxygen|O|-2|3.44\n").unwrap();
        fs::write(dir.path().join(".notes"), "not a dataset").unwrap();
        fs::create_dir(dir.path().join("archive")).unwrap();

        let registry = ElementRegistry::load_dir(dir.path()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_load_path_accepts_file_or_directory() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("elements.txt");
        fs::write(&file, "Element-Type:Ionic\nOxygen|O|-2|3.44\n").unwrap();

        assert_eq!(ElementRegistry::load_path(&file).unwrap().len(), 1);
        assert_eq!(ElementRegistry::load_path(dir.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_load_dir_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            ElementRegistry::load_dir(dir.path().join("absent")),
            Err(RegistryError::Io { .. })
        ));

        fs::write(dir.path().join("broken.txt"), "Oxygen|O|-2|3.44\n").unwrap();
        assert!(matches!(
            ElementRegistry::load_dir(dir.path()),
            Err(RegistryError::MissingSection { line: 1 })
        ));
    }

    #[test]
    fn test_empty_dir_is_empty_registry() {
        let dir = TempDir::new().unwrap();
        assert!(ElementRegistry::load_dir(dir.path()).unwrap().is_empty());
    }
}

mod builtin_tests {
    use super::*;

    #[test]
    fn test_builtin_symbols_are_unique() {
        let registry = ElementRegistry::builtin().unwrap();
        let mut symbols: Vec<&str> = registry
            .ionic()
            .iter()
            .map(|e| e.symbol())
            .chain(registry.transition().iter().map(|e| e.symbol()))
            .collect();
        let total = symbols.len();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), total);
    }

    #[test]
    fn test_builtin_transition_charges_have_numerals() {
        let registry = ElementRegistry::builtin().unwrap();
        for element in registry.transition() {
            assert!(!element.charges().is_empty());
            assert!(element.charges().iter().all(|c| (1..=10).contains(c)));
        }
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_relative_dataset_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chemgen.toml");
        fs::write(
            &path,
            "dataset = \"elements.yaml\"\n\n[generator]\ntransition_threshold = 75\n",
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.dataset, Some(dir.path().join("elements.yaml")));
        assert_eq!(config.generator.transition_threshold, 75);
        assert_eq!(config.generator.pair_count_max, 3);
    }

    #[test]
    fn test_invalid_generator_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chemgen.toml");
        fs::write(&path, "[generator]\nroll_max = 10\ntransition_threshold = 20\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }
}

//! Application state

use crate::export::{load_pairings, load_supports, save_pairings, save_supports};
use crate::simulation::GrowthSimulation;
use lineage_core::{
    available_classes, available_skills, default_constants, default_game_data, ChildPreview,
    ExperimentKey, GameData, Gender, GeneticLab, InheritanceConstants, LabSelection,
    PairingExperiment, PairingLog, Parent, RosterEntry, SupportRank, SupportRanks,
};
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// Number of stochastic runs behind one growth roll
const ROLL_TRIALS: u32 = 1000;

/// Where pairings are read from and exported to
const PAIRINGS_FILE: &str = "pairings.json";

/// Support ranks, stored next to the pairings file
const SUPPORTS_FILE: &str = "supports.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Lab,
    Pairings,
    Classes,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Lab, Tab::Pairings, Tab::Classes, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Lab => "Lab",
            Tab::Pairings => "Pairings",
            Tab::Classes => "Classes",
            Tab::Help => "Help",
        }
    }
}

/// Which parent list has focus in the lab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabFocus {
    Fathers,
    Mothers,
}

/// What the child panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatMode {
    Modifiers,
    Simulation,
}

pub struct App {
    pub current_tab: Tab,
    pub data: GameData,
    pub constants: InheritanceConstants,
    pub fathers: Vec<RosterEntry>,
    pub mothers: Vec<RosterEntry>,
    pub selected_father: usize,
    pub selected_mother: usize,
    pub focus: LabFocus,
    pub selection: LabSelection,
    pub stat_mode: StatMode,
    pub roll: Option<GrowthSimulation>,
    pub pairings: PairingLog,
    pub pairings_path: PathBuf,
    /// Why the pairings file could not be read; export stays off while set
    pub export_blocked: Option<String>,
    pub supports: SupportRanks,
    pub supports_path: PathBuf,
    pub supports_blocked: bool,
    pub selected_pairing: usize,
    pub selected_class: usize,
    pub status_message: String,
    pub rng: rand::rngs::StdRng,
    /// Tab to return to when help is dismissed
    pub previous_tab: Tab,
}

impl App {
    pub fn new() -> Self {
        let (data, constants) = Self::load_tables();
        Self::open(data, constants, PathBuf::from(PAIRINGS_FILE))
    }

    /// App over the given tables, reading saved pairings and support ranks
    /// from disk
    pub fn open(data: GameData, constants: InheritanceConstants, pairings_path: PathBuf) -> Self {
        let mut app = Self::with_data(data, constants, PairingLog::new(), pairings_path);
        app.load_saved_pairings();
        app.load_saved_supports();
        app
    }

    pub fn with_data(
        data: GameData,
        constants: InheritanceConstants,
        pairings: PairingLog,
        pairings_path: PathBuf,
    ) -> Self {
        let fathers: Vec<RosterEntry> = data
            .roster_by_gender(Gender::Male)
            .into_iter()
            .cloned()
            .collect();
        let mothers: Vec<RosterEntry> = data
            .roster_by_gender(Gender::Female)
            .into_iter()
            .cloned()
            .collect();

        let mut selection = LabSelection {
            level: constants.default_level,
            ..LabSelection::default()
        };
        if let Some(father) = fathers.first() {
            selection.set_father(Parent::new(father.name.clone(), father.class.clone()));
        }
        if let Some(mother) = mothers.first() {
            selection.set_mother(Parent::new(mother.name.clone(), mother.class.clone()));
        }

        App {
            current_tab: Tab::Lab,
            data,
            constants,
            fathers,
            mothers,
            selected_father: 0,
            selected_mother: 0,
            focus: LabFocus::Fathers,
            selection,
            stat_mode: StatMode::Modifiers,
            roll: None,
            pairings,
            supports_path: pairings_path.with_file_name(SUPPORTS_FILE),
            pairings_path,
            export_blocked: None,
            supports: SupportRanks::new(),
            supports_blocked: false,
            selected_pairing: 0,
            selected_class: 0,
            status_message: "Pick a father and a mother.".to_string(),
            rng: rand::rngs::StdRng::seed_from_u64(42),
            previous_tab: Tab::Lab,
        }
    }

    fn load_tables() -> (GameData, InheritanceConstants) {
        // Try a user-supplied config dir before the embedded tables
        let dirs = ["config", "lineage_core/config", "../lineage_core/config"];

        for dir in dirs {
            let path = Path::new(dir);
            if !path.is_dir() {
                continue;
            }
            match GameData::load_from_dir(path) {
                Ok(data) => {
                    let constants = InheritanceConstants::load_from_dir(path).unwrap_or_else(|e| {
                        tracing::warn!(dir, error = %e, "no usable constants.toml, using embedded constants");
                        default_constants()
                    });
                    return (data, constants);
                }
                Err(e) => {
                    tracing::warn!(dir, error = %e, "failed to load game data");
                }
            }
        }

        tracing::info!("using embedded game data");
        (default_game_data(), default_constants())
    }

    fn load_saved_pairings(&mut self) {
        let path = &self.pairings_path;
        if !path.exists() {
            return;
        }
        match load_pairings(path) {
            Ok(log) => {
                tracing::info!(count = log.len(), path = %path.display(), "loaded pairings");
                self.pairings = log;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load pairings, export disabled");
                self.status_message = format!("Could not read {}, export disabled.", path.display());
                self.export_blocked = Some(e.to_string());
            }
        }
    }

    fn load_saved_supports(&mut self) {
        let path = &self.supports_path;
        if !path.exists() {
            return;
        }
        match load_supports(path) {
            Ok(ranks) => {
                tracing::info!(count = ranks.len(), path = %path.display(), "loaded support ranks");
                self.supports = ranks;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load support ranks");
                self.supports_blocked = true;
            }
        }
    }

    pub fn lab(&self) -> GeneticLab<'_> {
        GeneticLab::new(&self.data, &self.constants)
    }

    /// Child preview for the current selection
    pub fn preview(&self) -> Option<ChildPreview> {
        self.lab().preview(&self.selection)
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn toggle_help(&mut self) {
        if self.current_tab == Tab::Help {
            self.current_tab = self.previous_tab;
        } else {
            self.previous_tab = self.current_tab;
            self.current_tab = Tab::Help;
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Lab => match self.focus {
                LabFocus::Fathers => {
                    if self.selected_father > 0 {
                        self.selected_father -= 1;
                        self.apply_father();
                    }
                }
                LabFocus::Mothers => {
                    if self.selected_mother > 0 {
                        self.selected_mother -= 1;
                        self.apply_mother();
                    }
                }
            },
            Tab::Pairings => {
                if self.selected_pairing > 0 {
                    self.selected_pairing -= 1;
                }
            }
            Tab::Classes => {
                if self.selected_class > 0 {
                    self.selected_class -= 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Lab => match self.focus {
                LabFocus::Fathers => {
                    if self.selected_father < self.fathers.len().saturating_sub(1) {
                        self.selected_father += 1;
                        self.apply_father();
                    }
                }
                LabFocus::Mothers => {
                    if self.selected_mother < self.mothers.len().saturating_sub(1) {
                        self.selected_mother += 1;
                        self.apply_mother();
                    }
                }
            },
            Tab::Pairings => {
                if self.selected_pairing < self.pairings.len().saturating_sub(1) {
                    self.selected_pairing += 1;
                }
            }
            Tab::Classes => {
                if self.selected_class < self.data.classes.len().saturating_sub(1) {
                    self.selected_class += 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        if self.current_tab == Tab::Lab {
            self.focus = LabFocus::Fathers;
        }
    }

    pub fn on_right(&mut self) {
        if self.current_tab == Tab::Lab {
            self.focus = LabFocus::Mothers;
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Lab => self.save_experiment(),
            Tab::Pairings => self.toggle_selected_pairing(),
            _ => {}
        }
    }

    fn apply_father(&mut self) {
        if let Some(father) = self.fathers.get(self.selected_father) {
            self.selection
                .set_father(Parent::new(father.name.clone(), father.class.clone()));
            self.roll = None;
        }
    }

    fn apply_mother(&mut self) {
        if let Some(mother) = self.mothers.get(self.selected_mother) {
            self.selection
                .set_mother(Parent::new(mother.name.clone(), mother.class.clone()));
            self.roll = None;
        }
    }

    /// Step the focused parent's planned class through its class tree.
    /// Wraps back to the parent's own class after the last entry.
    pub fn cycle_class(&mut self) {
        let (parent, current) = match self.focus {
            LabFocus::Fathers => (&self.selection.father, &self.selection.father_class),
            LabFocus::Mothers => (&self.selection.mother, &self.selection.mother_class),
        };
        let Some(parent) = parent else {
            return;
        };
        let options: Vec<String> = available_classes(&self.data, &parent.name)
            .into_iter()
            .map(|c| c.name.clone())
            .collect();
        let next = next_option(&options, current.as_ref());

        self.status_message = match &next {
            Some(class) => format!("{} planned as {}", parent.name, class),
            None => format!("{} back to current class", parent.name),
        };
        match self.focus {
            LabFocus::Fathers => {
                self.selection.father_class = next;
                self.selection.father_skill = None;
            }
            LabFocus::Mothers => {
                self.selection.mother_class = next;
                self.selection.mother_skill = None;
            }
        }
    }

    /// Step the focused parent's passed-down skill through the skills of its
    /// effective class. Wraps back to the prediction after the last entry.
    pub fn cycle_skill(&mut self) {
        let (parent, class_override, current) = match self.focus {
            LabFocus::Fathers => (
                &self.selection.father,
                &self.selection.father_class,
                &self.selection.father_skill,
            ),
            LabFocus::Mothers => (
                &self.selection.mother,
                &self.selection.mother_class,
                &self.selection.mother_skill,
            ),
        };
        let Some(parent) = parent else {
            return;
        };
        let options = available_skills(&self.data.class_skills, parent, class_override.as_deref()).to_vec();
        let next = next_option(&options, current.as_ref());

        self.status_message = match &next {
            Some(skill) => format!("{} passes {}", parent.name, skill.name),
            None => format!("{} passes the predicted skill", parent.name),
        };
        match self.focus {
            LabFocus::Fathers => self.selection.father_skill = next,
            LabFocus::Mothers => self.selection.mother_skill = next,
        }
    }

    pub fn level_up(&mut self) {
        self.selection.level = self.constants.clamp_level(self.selection.level + 1);
        self.roll = None;
    }

    pub fn level_down(&mut self) {
        self.selection.level = self
            .constants
            .clamp_level(self.selection.level.saturating_sub(1));
        self.roll = None;
    }

    pub fn toggle_stat_mode(&mut self) {
        self.stat_mode = match self.stat_mode {
            StatMode::Modifiers => StatMode::Simulation,
            StatMode::Simulation => StatMode::Modifiers,
        };
    }

    /// Run a batch of random growth rolls for the current child
    pub fn roll_growths(&mut self) {
        let Some(preview) = self.preview() else {
            self.status_message = "No child for this pairing.".to_string();
            return;
        };
        let lab = GeneticLab::new(&self.data, &self.constants);
        let simulation = GrowthSimulation::run(
            lab.calculator(),
            &preview.class,
            &preview.stats,
            preview.simulated.level,
            ROLL_TRIALS,
            &mut self.rng,
        );
        self.status_message = format!(
            "Rolled {} {} to level {} x{}",
            preview.name, preview.class, simulation.level, simulation.trials
        );
        self.roll = Some(simulation);
        self.stat_mode = StatMode::Simulation;
    }

    /// Save the current preview as a planned experiment
    pub fn save_experiment(&mut self) {
        let (Some(father), Some(mother)) = (&self.selection.father, &self.selection.mother) else {
            return;
        };
        let Some(preview) = self.preview() else {
            self.status_message = "No child for this pairing.".to_string();
            return;
        };

        let id = self.pairings.next_id();
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let experiment = PairingExperiment::from_preview(id, &father.name, &mother.name, &preview, date);
        tracing::info!(id, child = %experiment.child, "saved experiment");
        self.status_message = format!(
            "Saved {} ({} x {})",
            experiment.child, experiment.parent1, experiment.parent2
        );
        self.pairings.add(experiment);
        self.selected_pairing = 0;
    }

    fn selected_pairing_key(&self) -> Option<ExperimentKey> {
        self.pairings
            .experiments()
            .get(self.selected_pairing)
            .map(PairingExperiment::key)
    }

    pub fn toggle_selected_pairing(&mut self) {
        let Some(key) = self.selected_pairing_key() else {
            return;
        };
        if let Some(status) = self.pairings.toggle_status(&key) {
            self.status_message = format!("Pairing {} is now {}", key, status.name());
        }
    }

    pub fn delete_selected_pairing(&mut self) {
        let Some(key) = self.selected_pairing_key() else {
            return;
        };
        if let Some(removed) = self.pairings.remove(&key) {
            self.status_message = format!("Deleted {}", removed.child);
        }
        if self.selected_pairing >= self.pairings.len() {
            self.selected_pairing = self.pairings.len().saturating_sub(1);
        }
    }

    pub fn export_pairings(&mut self) {
        if let Some(reason) = &self.export_blocked {
            tracing::warn!(path = %self.pairings_path.display(), reason = %reason, "refusing to overwrite unreadable pairings file");
            self.status_message = format!(
                "Not overwriting {}: it failed to load ({})",
                self.pairings_path.display(),
                reason
            );
            return;
        }
        self.status_message = match save_pairings(&self.pairings_path, &self.pairings) {
            Ok(()) => format!(
                "Wrote {} pairings to {}",
                self.pairings.len(),
                self.pairings_path.display()
            ),
            Err(e) => {
                tracing::error!(error = %e, "pairing export failed");
                format!("Export failed: {}", e)
            }
        };
    }
}

impl App {
    /// Jump to the best unmarried pair, ranked by support
    pub fn smart_pair(&mut self) {
        let lab = GeneticLab::new(&self.data, &self.constants);
        let current = (
            self.selection.father.as_ref().map(|p| p.name.as_str()),
            self.selection.mother.as_ref().map(|p| p.name.as_str()),
        );
        let Some(pair) = lab.suggest_pair(&self.pairings, &self.supports, current, &mut self.rng)
        else {
            self.status_message = "Everyone is already paired.".to_string();
            return;
        };

        if let Some(index) = self.fathers.iter().position(|f| f.name == pair.father) {
            self.selected_father = index;
            self.apply_father();
        }
        if let Some(index) = self.mothers.iter().position(|m| m.name == pair.mother) {
            self.selected_mother = index;
            self.apply_mother();
        }
        self.status_message = format!("Suggested {} x {}", pair.father, pair.mother);
    }

    /// Support rank of the selected pair
    pub fn current_support(&self) -> Option<SupportRank> {
        let father = self.selection.father.as_ref()?;
        let mother = self.selection.mother.as_ref()?;
        self.supports.get(&father.name, &mother.name)
    }

    /// Step the selected pair's support rank and save the rank list
    pub fn cycle_support(&mut self) {
        let (Some(father), Some(mother)) = (&self.selection.father, &self.selection.mother) else {
            return;
        };
        let rank = SupportRank::next(self.supports.get(&father.name, &mother.name));
        self.supports.set(&father.name, &mother.name, rank);
        let label = rank.map_or("none", |r| r.name());
        self.status_message = format!("{} x {} support: {}", father.name, mother.name, label);

        if self.supports_blocked {
            tracing::warn!(path = %self.supports_path.display(), "support file unreadable, not saving");
            return;
        }
        if let Err(e) = save_supports(&self.supports_path, &self.supports) {
            tracing::error!(error = %e, "support export failed");
            self.status_message = format!("Saving supports failed: {}", e);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Next entry after `current`, `None` after the last one
fn next_option<T: Clone + PartialEq>(options: &[T], current: Option<&T>) -> Option<T> {
    match current {
        None => options.first().cloned(),
        Some(current) => {
            let index = options.iter().position(|o| o == current)?;
            options.get(index + 1).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::with_data(
            default_game_data(),
            default_constants(),
            PairingLog::new(),
            std::env::temp_dir().join("lineage_tui_app_test.json"),
        )
    }

    #[test]
    fn test_initial_selection_has_both_parents() {
        let app = test_app();
        assert!(app.selection.father.is_some());
        assert!(app.selection.mother.is_some());
        assert_eq!(app.selection.level, 20);
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = test_app();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Pairings);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
    }

    #[test]
    fn test_toggle_help_returns_to_previous_tab() {
        let mut app = test_app();
        app.set_tab(2);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Help);
        app.toggle_help();
        assert_eq!(app.current_tab, Tab::Classes);
    }

    #[test]
    fn test_save_experiment() {
        let mut app = test_app();
        // Robin (M) x Robin (F) -> Morgan (M)
        assert!(app.preview().is_some());
        app.save_experiment();
        assert_eq!(app.pairings.len(), 1);
        app.save_experiment();
        assert_eq!(app.pairings.experiments()[0].id, 2);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("lineage_tui_{}", name));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_unreadable_pairings_are_not_overwritten() {
        let dir = scratch_dir("unreadable_pairings");
        let path = dir.join(PAIRINGS_FILE);
        let unreadable = r#"[{"familyId": "x", "status": 7}]"#;
        std::fs::write(&path, unreadable).unwrap();

        let mut app = App::open(default_game_data(), default_constants(), path.clone());
        assert!(app.export_blocked.is_some());
        assert!(app.pairings.is_empty());

        app.save_experiment();
        app.export_pairings();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), unreadable);
    }

    #[test]
    fn test_opens_desktop_pairing_file() {
        let dir = scratch_dir("desktop_pairings");
        let path = dir.join(PAIRINGS_FILE);
        let saved = r#"[
            {"id": 1760000000000, "familyId": "gen-lab-1760000000000",
             "parent1": "Chrom", "parent2": "Olivia", "child": "Inigo",
             "stats": {"str": 2, "spd": 3},
             "simulatedStats": {"hp": 35, "str": 19},
             "fatherSkill": {"name": "Rightful King", "lv": 15},
             "date": "10/16/2026", "status": "Planned"},
            {"familyId": "family-1760000000001", "parent1": "Gaius", "parent2": "Maribelle",
             "child": "?", "status": "S Rank", "recruited": false}
        ]"#;
        std::fs::write(&path, saved).unwrap();

        let mut app = App::open(default_game_data(), default_constants(), path.clone());
        assert!(app.export_blocked.is_none());
        assert_eq!(app.pairings.len(), 2);

        // Toggle the id-less record, then write everything back
        app.selected_pairing = 1;
        app.toggle_selected_pairing();
        app.export_pairings();
        let reloaded = load_pairings(&path).unwrap();
        assert_eq!(reloaded.planned().count(), 2);
        assert_eq!(reloaded.experiments()[1].extra.get("recruited"), Some(&serde_json::Value::Bool(false)));
    }

    #[test]
    fn test_smart_pair_skips_married_parents() {
        let dir = scratch_dir("smart_pair");
        let mut app = App::open(default_game_data(), default_constants(), dir.join(PAIRINGS_FILE));
        // Robin (M) x Robin (F)
        app.save_experiment();
        app.smart_pair();

        let father = app.selection.father.as_ref().unwrap();
        let mother = app.selection.mother.as_ref().unwrap();
        assert_ne!(father.name, "Robin (M)");
        assert_ne!(mother.name, "Robin (F)");
        assert_eq!(app.fathers[app.selected_father].name, father.name);
        assert_eq!(app.mothers[app.selected_mother].name, mother.name);
    }

    #[test]
    fn test_cycle_support_saves_rank() {
        let dir = scratch_dir("cycle_support");
        let mut app = App::open(default_game_data(), default_constants(), dir.join(PAIRINGS_FILE));
        assert_eq!(app.current_support(), None);
        app.cycle_support();
        app.cycle_support();
        assert_eq!(app.current_support(), Some(SupportRank::B));

        let reopened = App::open(default_game_data(), default_constants(), dir.join(PAIRINGS_FILE));
        assert_eq!(reopened.current_support(), Some(SupportRank::B));
    }

    #[test]
    fn test_level_bounds() {
        let mut app = test_app();
        app.selection.level = 1;
        app.level_down();
        assert_eq!(app.selection.level, 1);
        app.selection.level = 99;
        app.level_up();
        assert_eq!(app.selection.level, 99);
    }

    #[test]
    fn test_cycle_class_wraps() {
        let mut app = test_app();
        app.on_down(); // Chrom
        let chrom_classes = available_classes(&app.data, "Chrom").len();
        for _ in 0..chrom_classes {
            app.cycle_class();
            assert!(app.selection.father_class.is_some());
        }
        app.cycle_class();
        assert!(app.selection.father_class.is_none());
    }

    #[test]
    fn test_cycle_skill_overrides_preview() {
        let mut app = test_app();
        app.on_down(); // Chrom, Lord
        app.cycle_skill();
        let preview = app.preview().unwrap();
        assert_eq!(preview.father_skill.unwrap().name, "Dual Strike+");
    }

    #[test]
    fn test_roll_growths_sets_simulation() {
        let mut app = test_app();
        app.roll_growths();
        let roll = app.roll.as_ref().unwrap();
        assert_eq!(roll.trials, ROLL_TRIALS);
        assert_eq!(app.stat_mode, StatMode::Simulation);
    }

    #[test]
    fn test_delete_adjusts_selection() {
        let mut app = test_app();
        app.save_experiment();
        app.save_experiment();
        app.selected_pairing = 1;
        app.delete_selected_pairing();
        assert_eq!(app.pairings.len(), 1);
        assert_eq!(app.selected_pairing, 0);
    }

    #[test]
    fn test_next_option() {
        let options = vec![1, 2, 3];
        assert_eq!(next_option(&options, None), Some(1));
        assert_eq!(next_option(&options, Some(&2)), Some(3));
        assert_eq!(next_option(&options, Some(&3)), None);
        assert_eq!(next_option(&options, Some(&9)), None);
    }
}

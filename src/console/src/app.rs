use crate::{Console, ConsoleError, ConsoleSettings, MenuCommand};
use itertools::Itertools;
use log::{debug, info};
use scout_core::{CurrencyValue, Player, PlayerOrdering, PlayerPositionType, PlayerSkills, Roster};
use std::io::{BufRead, Write};
use std::rc::Rc;

pub const SQUAD_CAPACITY: usize = 10;

const MENU_TITLE: &str = "=== FOOTBALL SCOUT MANAGER ===";

fn position_hint() -> String {
    let codes = PlayerPositionType::ALL
        .iter()
        .map(|position| format!("{}-{}", position.code(), position))
        .join(" ");

    format!("Position: {}", codes)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive session over a catalog and the dream-team squad picked from it.
pub struct ScoutApp<R, W> {
    catalog: Roster,
    squad: Roster,
    settings: ConsoleSettings,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> ScoutApp<R, W> {
    pub fn new(catalog: Roster, squad: Roster, settings: ConsoleSettings, input: R, output: W) -> Self {
        ScoutApp {
            catalog,
            squad,
            settings,
            console: Console::new(input, output),
        }
    }

    pub fn catalog(&self) -> &Roster {
        &self.catalog
    }

    pub fn squad(&self) -> &Roster {
        &self.squad
    }

    pub fn output(&self) -> &W {
        self.console.output()
    }

    /// Runs until the user exits or the input ends.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    info!("session finished by user");
                    return Ok(());
                }
                Err(ConsoleError::EndOfInput) => {
                    info!("input closed, session finished");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn step(&mut self) -> Result<Flow, ConsoleError> {
        self.show_menu()?;

        let choice = self.console.ask("Choice: ")?;
        if self.settings.clear_screen {
            self.console.clear()?;
        }

        let Some(command) = MenuCommand::parse(&choice) else {
            debug!("unknown menu choice: {:?}", choice);
            self.console.line("Invalid choice!")?;
            self.pause()?;
            return Ok(Flow::Continue);
        };

        debug!("menu command: {:?}", command);

        match command {
            MenuCommand::ShowCatalog => self.show_catalog()?,
            MenuCommand::AddPlayer => self.add_player()?,
            MenuCommand::RemovePlayer => self.remove_player()?,
            MenuCommand::AddToSquad => self.add_to_squad()?,
            MenuCommand::ShowSquad => self.show_squad()?,
            MenuCommand::Exit => return Ok(Flow::Exit),
            MenuCommand::SortByValueAscending
            | MenuCommand::SortByValueDescending
            | MenuCommand::SortByScore
            | MenuCommand::SortByName => {
                if let Some((ordering, heading)) = command.ordering() {
                    self.sort_catalog(&ordering, heading)?;
                }
            }
        }

        self.pause()?;

        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> Result<(), ConsoleError> {
        self.console.line(MENU_TITLE)?;
        for command in MenuCommand::ALL {
            self.console.line(format!("{}. {}", command.key(), command.label()))?;
        }
        self.console.line("")
    }

    fn pause(&mut self) -> Result<(), ConsoleError> {
        if !self.settings.pause_after_command {
            return Ok(());
        }

        self.console.line("\nPress Enter...")?;
        self.console.read_line()?;
        if self.settings.clear_screen {
            self.console.clear()?;
        }

        Ok(())
    }

    fn print_roster(console: &mut Console<R, W>, roster: &Roster) -> Result<(), ConsoleError> {
        for (index, row) in roster.list_indexed() {
            console.line(format!("{}. {}", index, row))?;
        }
        Ok(())
    }

    fn show_catalog(&mut self) -> Result<(), ConsoleError> {
        Self::print_roster(&mut self.console, &self.catalog)
    }

    fn show_squad(&mut self) -> Result<(), ConsoleError> {
        self.console.line(format!(
            "=== DREAM TEAM ({}/{}) ===",
            self.squad.len(),
            SQUAD_CAPACITY
        ))?;
        Self::print_roster(&mut self.console, &self.squad)
    }

    fn sort_catalog(&mut self, ordering: &PlayerOrdering, heading: &str) -> Result<(), ConsoleError> {
        self.catalog.sort_by(ordering);
        self.console.line(heading)?;
        self.show_catalog()
    }

    fn add_player(&mut self) -> Result<(), ConsoleError> {
        let name = self.console.ask("Name: ")?;
        let nationality = self.console.ask("Nationality: ")?;
        let age = self.console.ask_parsed::<u32>("Age: ")?;

        let hint = format!("{}\n", position_hint());
        let position = self.console.ask_mapped(&hint, PlayerPositionType::from_code)?;

        let value = self.console.ask_parsed::<f64>("Value (in millions): ")?;
        let club = self.console.ask("Club: ")?;

        let speed = self.console.ask_parsed::<u32>("Speed: ")?;
        let stamina = self.console.ask_parsed::<u32>("Stamina: ")?;
        let technique = self.console.ask_parsed::<u32>("Technique: ")?;
        let shot_power = self.console.ask_parsed::<u32>("Shot power: ")?;

        let player = Player::new(
            name,
            nationality,
            age,
            position,
            CurrencyValue::eur(value),
            club,
            PlayerSkills::new(speed, stamina, technique, shot_power),
        );

        info!("player added to catalog: {}", player.identity());

        self.catalog.add(Rc::new(player));
        self.console.line("✔ Player added!")
    }

    // Out-of-range input is not reported here; the roster ignores it.
    fn remove_player(&mut self) -> Result<(), ConsoleError> {
        self.show_catalog()?;

        let index = self.console.ask_parsed::<i64>("Choose index to remove: ")?;
        if let Ok(index) = usize::try_from(index) {
            if let Some(removed) = self.catalog.remove_at(index) {
                info!("player removed from catalog: {}", removed.identity());
            }
        }

        self.console.line("✔ Player removed!")
    }

    fn add_to_squad(&mut self) -> Result<(), ConsoleError> {
        if self.squad.len() >= SQUAD_CAPACITY {
            return self
                .console
                .line(format!("❌ The team already has {} players!", SQUAD_CAPACITY));
        }

        self.show_catalog()?;

        let index = self.console.ask_parsed::<i64>("Choose index to add: ")?;
        let selected = usize::try_from(index)
            .ok()
            .and_then(|index| self.catalog.get(index))
            .map(Rc::clone);

        let Some(selected) = selected else {
            return self.console.line("❌ Invalid index!");
        };

        if self.squad.contains(&selected) {
            return self.console.line("❌ This player is already in the team!");
        }

        info!("player added to squad: {}", selected.identity());

        self.squad.add(selected);
        self.console.line("✔ Added to the team!")
    }
}

use scout_core::PlayerOrdering;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    ShowCatalog,
    AddPlayer,
    RemovePlayer,
    AddToSquad,
    ShowSquad,
    SortByValueAscending,
    SortByValueDescending,
    SortByScore,
    SortByName,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 10] = [
        MenuCommand::ShowCatalog,
        MenuCommand::AddPlayer,
        MenuCommand::RemovePlayer,
        MenuCommand::AddToSquad,
        MenuCommand::ShowSquad,
        MenuCommand::SortByValueAscending,
        MenuCommand::SortByValueDescending,
        MenuCommand::SortByScore,
        MenuCommand::SortByName,
        MenuCommand::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuCommand::ShowCatalog),
            "2" => Some(MenuCommand::AddPlayer),
            "3" => Some(MenuCommand::RemovePlayer),
            "4" => Some(MenuCommand::AddToSquad),
            "5" => Some(MenuCommand::ShowSquad),
            "6" => Some(MenuCommand::SortByValueAscending),
            "7" => Some(MenuCommand::SortByValueDescending),
            "8" => Some(MenuCommand::SortByScore),
            "9" => Some(MenuCommand::SortByName),
            "0" => Some(MenuCommand::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            MenuCommand::ShowCatalog => '1',
            MenuCommand::AddPlayer => '2',
            MenuCommand::RemovePlayer => '3',
            MenuCommand::AddToSquad => '4',
            MenuCommand::ShowSquad => '5',
            MenuCommand::SortByValueAscending => '6',
            MenuCommand::SortByValueDescending => '7',
            MenuCommand::SortByScore => '8',
            MenuCommand::SortByName => '9',
            MenuCommand::Exit => '0',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuCommand::ShowCatalog => "Show all players",
            MenuCommand::AddPlayer => "Add new player",
            MenuCommand::RemovePlayer => "Remove player",
            MenuCommand::AddToSquad => "Add player to dream team (max 10)",
            MenuCommand::ShowSquad => "Show dream team",
            MenuCommand::SortByValueAscending => "Sort by price (ascending)",
            MenuCommand::SortByValueDescending => "Sort by price (descending)",
            MenuCommand::SortByScore => "Sort by rating",
            MenuCommand::SortByName => "Sort by name",
            MenuCommand::Exit => "Exit",
        }
    }

    /// Policy and confirmation heading for the sort commands.
    pub fn ordering(&self) -> Option<(PlayerOrdering, &'static str)> {
        match self {
            MenuCommand::SortByValueAscending => {
                Some((PlayerOrdering::by_value(true), "Sorted by price (ascending):"))
            }
            MenuCommand::SortByValueDescending => {
                Some((PlayerOrdering::by_value(false), "Sorted by price (descending):"))
            }
            MenuCommand::SortByScore => Some((PlayerOrdering::by_score(), "Sorted by rating:")),
            MenuCommand::SortByName => Some((PlayerOrdering::by_name(), "Sorted by name:")),
            _ => None,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PlayerSkills {
    speed: u32,
    stamina: u32,
    technique: u32,
    shot_power: u32,
}

impl PlayerSkills {
    pub fn new(speed: u32, stamina: u32, technique: u32, shot_power: u32) -> Self {
        PlayerSkills {
            speed,
            stamina,
            technique,
            shot_power,
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    pub fn technique(&self) -> u32 {
        self.technique
    }

    pub fn shot_power(&self) -> u32 {
        self.shot_power
    }

    /// Mean of the four attributes. Recomputed on every call.
    pub fn score(&self) -> f64 {
        (self.speed as f64 + self.stamina as f64 + self.technique as f64 + self.shot_power as f64)
            / 4.0
    }
}

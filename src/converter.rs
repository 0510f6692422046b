//! Unit converter: distance, temperature and weight

use std::fmt;
use std::str::FromStr;

use crate::console::{pause, prompt_number, Console, Screen};
use crate::errors::{Result, ToolError};

const KM_TO_MILES: f64 = 0.621371;
const MILES_TO_KM: f64 = 1.60934;
const KG_TO_POUNDS: f64 = 2.20462;
const POUNDS_TO_KG: f64 = 0.453592;

pub fn km_to_miles(km: f64) -> f64 {
    km * KM_TO_MILES
}

pub fn miles_to_km(miles: f64) -> f64 {
    miles * MILES_TO_KM
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0) + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn kg_to_pounds(kg: f64) -> f64 {
    kg * KG_TO_POUNDS
}

pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * POUNDS_TO_KG
}

/// One direction of one unit pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    KmToMiles,
    MilesToKm,
    CelsiusToFahrenheit,
    FahrenheitToCelsius,
    KgToPounds,
    PoundsToKg,
}

impl Conversion {
    pub const ALL: [Conversion; 6] = [
        Conversion::KmToMiles,
        Conversion::MilesToKm,
        Conversion::CelsiusToFahrenheit,
        Conversion::FahrenheitToCelsius,
        Conversion::KgToPounds,
        Conversion::PoundsToKg,
    ];

    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::KmToMiles => km_to_miles(value),
            Conversion::MilesToKm => miles_to_km(value),
            Conversion::CelsiusToFahrenheit => celsius_to_fahrenheit(value),
            Conversion::FahrenheitToCelsius => fahrenheit_to_celsius(value),
            Conversion::KgToPounds => kg_to_pounds(value),
            Conversion::PoundsToKg => pounds_to_kg(value),
        }
    }

    /// Command-line name, e.g. `km-to-miles`
    pub fn name(&self) -> &'static str {
        match self {
            Conversion::KmToMiles => "km-to-miles",
            Conversion::MilesToKm => "miles-to-km",
            Conversion::CelsiusToFahrenheit => "c-to-f",
            Conversion::FahrenheitToCelsius => "f-to-c",
            Conversion::KgToPounds => "kg-to-lbs",
            Conversion::PoundsToKg => "lbs-to-kg",
        }
    }

    /// Human label shown in the sub-menu
    pub fn label(&self) -> &'static str {
        match self {
            Conversion::KmToMiles => "Kilometers to Miles",
            Conversion::MilesToKm => "Miles to Kilometers",
            Conversion::CelsiusToFahrenheit => "Celsius to Fahrenheit",
            Conversion::FahrenheitToCelsius => "Fahrenheit to Celsius",
            Conversion::KgToPounds => "Kilograms to Pounds",
            Conversion::PoundsToKg => "Pounds to Kilograms",
        }
    }

    /// Prompt used to ask for the input value
    pub fn prompt(&self) -> &'static str {
        match self {
            Conversion::KmToMiles => "Enter kilometers: ",
            Conversion::MilesToKm => "Enter miles: ",
            Conversion::CelsiusToFahrenheit => "Enter temperature in Celsius: ",
            Conversion::FahrenheitToCelsius => "Enter temperature in Fahrenheit: ",
            Conversion::KgToPounds => "Enter weight in kilograms: ",
            Conversion::PoundsToKg => "Enter weight in pounds: ",
        }
    }

    /// (from, to) unit suffixes
    pub fn units(&self) -> (&'static str, &'static str) {
        match self {
            Conversion::KmToMiles => (" km", " miles"),
            Conversion::MilesToKm => (" miles", " km"),
            Conversion::CelsiusToFahrenheit => ("°C", "°F"),
            Conversion::FahrenheitToCelsius => ("°F", "°C"),
            Conversion::KgToPounds => (" kg", " lbs"),
            Conversion::PoundsToKg => (" lbs", " kg"),
        }
    }

    /// `"5 km = 3.11 miles"`
    pub fn format(&self, value: f64) -> String {
        let (from, to) = self.units();
        format!("{}{} = {:.2}{}", value, from, self.apply(value), to)
    }
}

impl FromStr for Conversion {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Conversion::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ToolError::UnknownConversion(s.trim().to_string()))
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit pair offered in the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Distance,
    Temperature,
    Weight,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Distance, Category::Temperature, Category::Weight];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Distance => "Distance Converter",
            Category::Temperature => "Temperature Converter",
            Category::Weight => "Weight Converter",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Category::Distance => "Kilometers ↔ Miles",
            Category::Temperature => "Celsius ↔ Fahrenheit",
            Category::Weight => "Kilograms ↔ Pounds",
        }
    }

    /// The two directions, in menu order
    pub fn conversions(&self) -> [Conversion; 2] {
        match self {
            Category::Distance => [Conversion::KmToMiles, Conversion::MilesToKm],
            Category::Temperature => [Conversion::CelsiusToFahrenheit, Conversion::FahrenheitToCelsius],
            Category::Weight => [Conversion::KgToPounds, Conversion::PoundsToKg],
        }
    }
}

/// Sub-menu for one category
fn convert_category(console: &mut dyn Console, category: Category) -> Result<()> {
    console.section(category.title());
    let conversions = category.conversions();
    for (i, conversion) in conversions.iter().enumerate() {
        console.say(&format!("{}. {}", i + 1, conversion.label()));
    }

    let choice = console.read_line("Choose conversion (1 or 2): ")?;
    let conversion = match choice.trim() {
        "1" => conversions[0],
        "2" => conversions[1],
        _ => {
            console.error("Invalid choice!");
            return Ok(());
        }
    };

    let value: f64 = prompt_number(console, conversion.prompt(), "Please enter a valid number!")?;
    tracing::debug!(%conversion, value, "converting");
    console.success(&conversion.format(value));
    Ok(())
}

/// Interactive converter session
pub fn run(console: &mut dyn Console) -> Result<()> {
    let mut options: Vec<&str> = Category::ALL.iter().map(|c| c.menu_label()).collect();
    options.push("Exit");

    loop {
        console.menu("        UNIT CONVERTER APP", &options);
        let choice = console.read_line("\nEnter your choice (1-4): ")?;

        match choice.trim() {
            "1" => convert_category(console, Category::Distance)?,
            "2" => convert_category(console, Category::Temperature)?,
            "3" => convert_category(console, Category::Weight)?,
            "4" => {
                console.say("\nThank you for using Unit Converter!");
                console.say("Goodbye! 👋");
                return Ok(());
            }
            _ => console.error("Invalid choice! Please enter 1-4."),
        }

        pause(console, "\nPress Enter to continue...")?;
    }
}

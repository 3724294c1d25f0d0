//! The fixed catalog: eight cars per era, in canonical model-year order
//!
//! Deck order is the answer key. Every function returns its cars sorted by
//! ascending year, and the board treats index i as "the slot whose correct
//! year is deck[i].year". Ids are unique across the whole catalog.

use super::car::Car;
use super::era::Era;

pub fn deck(era: Era) -> Vec<Car> {
    match era {
        Era::ChromeAndFins => chrome_and_fins(),
        Era::SportingDecades => sporting_decades(),
        Era::AnalogToDigital => analog_to_digital(),
        Era::NewMillennium => new_millennium(),
    }
}

fn chrome_and_fins() -> Vec<Car> {
    vec![
        Car::new(1, "Mercedes-Benz 500K", 1936, "/assets/cars/mb-500k.png"),
        Car::new(2, "Volkswagen Beetle", 1938, "/assets/cars/beetle.png"),
        Car::new(3, "Citroën 2CV", 1948, "/assets/cars/2cv.png"),
        Car::new(4, "Volkswagen Kombi", 1950, "/assets/cars/kombi.png"),
        Car::new(5, "Chevrolet Corvette", 1953, "/assets/cars/corvette.png"),
        Car::new(6, "Citroën DS", 1955, "/assets/cars/ds.png"),
        Car::new(7, "Fiat 500", 1957, "/assets/cars/fiat500.png"),
        Car::new(8, "Mini", 1959, "/assets/cars/mini.png"),
    ]
}

fn sporting_decades() -> Vec<Car> {
    vec![
        Car::new(11, "Jaguar E-Type", 1961, "/assets/cars/etype.png"),
        Car::new(12, "Porsche 911", 1963, "/assets/cars/911.png"),
        Car::new(13, "Ford Mustang", 1964, "/assets/cars/mustang.png"),
        Car::new(14, "Lamborghini Miura", 1966, "/assets/cars/miura.png"),
        Car::new(15, "Dodge Charger", 1969, "/assets/cars/charger.png"),
        Car::new(16, "Range Rover", 1970, "/assets/cars/rangerover.png"),
        Car::new(17, "Volkswagen Golf", 1974, "/assets/cars/golf.png"),
        Car::new(18, "Lotus Esprit", 1976, "/assets/cars/esprit.png"),
    ]
}

fn analog_to_digital() -> Vec<Car> {
    vec![
        Car::new(21, "DeLorean DMC-12", 1981, "/assets/cars/delorean.png"),
        Car::new(22, "Ferrari Testarossa", 1984, "/assets/cars/testarossa.png"),
        Car::new(23, "BMW M3", 1986, "/assets/cars/m3.png"),
        Car::new(24, "Mazda MX-5", 1989, "/assets/cars/mx5.png"),
        Car::new(25, "McLaren F1", 1992, "/assets/cars/mclarenf1.png"),
        Car::new(26, "Toyota Supra", 1993, "/assets/cars/supra.png"),
        Car::new(27, "Toyota Prius", 1997, "/assets/cars/prius.png"),
        Car::new(28, "Honda S2000", 1999, "/assets/cars/s2000.png"),
    ]
}

fn new_millennium() -> Vec<Car> {
    vec![
        Car::new(31, "Porsche Carrera GT", 2003, "/assets/cars/carreragt.png"),
        Car::new(32, "Bugatti Veyron", 2005, "/assets/cars/veyron.png"),
        Car::new(33, "Tesla Roadster", 2008, "/assets/cars/roadster.png"),
        Car::new(34, "Lexus LFA", 2010, "/assets/cars/lfa.png"),
        Car::new(35, "Tesla Model S", 2012, "/assets/cars/models.png"),
        Car::new(36, "Ferrari LaFerrari", 2013, "/assets/cars/laferrari.png"),
        Car::new(37, "Bugatti Chiron", 2016, "/assets/cars/chiron.png"),
        Car::new(38, "Porsche Taycan", 2019, "/assets/cars/taycan.png"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_deck_has_eight_cars() {
        for era in Era::ALL {
            assert_eq!(deck(era).len(), 8, "{era}");
        }
    }

    #[test]
    fn decks_are_year_sorted() {
        for era in Era::ALL {
            let cars = deck(era);
            for pair in cars.windows(2) {
                assert!(
                    pair[0].year <= pair[1].year,
                    "{era}: {} ({}) before {} ({})",
                    pair[0].name,
                    pair[0].year,
                    pair[1].name,
                    pair[1].year
                );
            }
        }
    }

    #[test]
    fn ids_unique_across_catalog() {
        let mut seen = HashSet::new();
        for era in Era::ALL {
            for car in deck(era) {
                assert!(seen.insert(car.id), "duplicate id {} ({})", car.id, car.name);
            }
        }
    }
}

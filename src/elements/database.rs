/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Static element database
//!
//! Symbols and IUPAC English names for atomic numbers 1 through 118,
//! indexed by atomic number, plus the reverse symbol lookup the CLI uses
//! to resolve element queries.

/// (symbol, name) per element, row `z - 1` holding atomic number `z`
static ELEMENTS: [(&str, &str); 118] = [
    ("H", "Hydrogen"),
    ("He", "Helium"),
    ("Li", "Lithium"),
    ("Be", "Beryllium"),
    ("B", "Boron"),
    ("C", "Carbon"),
    ("N", "Nitrogen"),
    ("O", "Oxygen"),
    ("F", "Fluorine"),
    ("Ne", "Neon"),
    ("Na", "Sodium"),
    ("Mg", "Magnesium"),
    ("Al", "Aluminium"),
    ("Si", "Silicon"),
    ("P", "Phosphorus"),
    ("S", "Sulfur"),
    ("Cl", "Chlorine"),
    ("Ar", "Argon"),
    ("K", "Potassium"),
    ("Ca", "Calcium"),
    ("Sc", "Scandium"),
    ("Ti", "Titanium"),
    ("V", "Vanadium"),
    ("Cr", "Chromium"),
    ("Mn", "Manganese"),
    ("Fe", "Iron"),
    ("Co", "Cobalt"),
    ("Ni", "Nickel"),
    ("Cu", "Copper"),
    ("Zn", "Zinc"),
    ("Ga", "Gallium"),
    ("Ge", "Germanium"),
    ("As", "Arsenic"),
    ("Se", "Selenium"),
    ("Br", "Bromine"),
    ("Kr", "Krypton"),
    ("Rb", "Rubidium"),
    ("Sr", "Strontium"),
    ("Y", "Yttrium"),
    ("Zr", "Zirconium"),
    ("Nb", "Niobium"),
    ("Mo", "Molybdenum"),
    ("Tc", "Technetium"),
    ("Ru", "Ruthenium"),
    ("Rh", "Rhodium"),
    ("Pd", "Palladium"),
    ("Ag", "Silver"),
    ("Cd", "Cadmium"),
    ("In", "Indium"),
    ("Sn", "Tin"),
    ("Sb", "Antimony"),
    ("Te", "Tellurium"),
    ("I", "Iodine"),
    ("Xe", "Xenon"),
    ("Cs", "Caesium"),
    ("Ba", "Barium"),
    ("La", "Lanthanum"),
    ("Ce", "Cerium"),
    ("Pr", "Praseodymium"),
    ("Nd", "Neodymium"),
    ("Pm", "Promethium"),
    ("Sm", "Samarium"),
    ("Eu", "Europium"),
    ("Gd", "Gadolinium"),
    ("Tb", "Terbium"),
    ("Dy", "Dysprosium"),
    ("Ho", "Holmium"),
    ("Er", "Erbium"),
    ("Tm", "Thulium"),
    ("Yb", "Ytterbium"),
    ("Lu", "Lutetium"),
    ("Hf", "Hafnium"),
    ("Ta", "Tantalum"),
    ("W", "Tungsten"),
    ("Re", "Rhenium"),
    ("Os", "Osmium"),
    ("Ir", "Iridium"),
    ("Pt", "Platinum"),
    ("Au", "Gold"),
    ("Hg", "Mercury"),
    ("Tl", "Thallium"),
    ("Pb", "Lead"),
    ("Bi", "Bismuth"),
    ("Po", "Polonium"),
    ("At", "Astatine"),
    ("Rn", "Radon"),
    ("Fr", "Francium"),
    ("Ra", "Radium"),
    ("Ac", "Actinium"),
    ("Th", "Thorium"),
    ("Pa", "Protactinium"),
    ("U", "Uranium"),
    ("Np", "Neptunium"),
    ("Pu", "Plutonium"),
    ("Am", "Americium"),
    ("Cm", "Curium"),
    ("Bk", "Berkelium"),
    ("Cf", "Californium"),
    ("Es", "Einsteinium"),
    ("Fm", "Fermium"),
    ("Md", "Mendelevium"),
    ("No", "Nobelium"),
    ("Lr", "Lawrencium"),
    ("Rf", "Rutherfordium"),
    ("Db", "Dubnium"),
    ("Sg", "Seaborgium"),
    ("Bh", "Bohrium"),
    ("Hs", "Hassium"),
    ("Mt", "Meitnerium"),
    ("Ds", "Darmstadtium"),
    ("Rg", "Roentgenium"),
    ("Cn", "Copernicium"),
    ("Nh", "Nihonium"),
    ("Fl", "Flerovium"),
    ("Mc", "Moscovium"),
    ("Lv", "Livermorium"),
    ("Ts", "Tennessine"),
    ("Og", "Oganesson"),
];

fn element_entry(atomic_number: i32) -> Option<(&'static str, &'static str)> {
    if atomic_number < 1 {
        return None;
    }
    ELEMENTS.get(atomic_number as usize - 1).copied()
}

/// Returns the element symbol for an atomic number
pub fn element_symbol(atomic_number: i32) -> Option<&'static str> {
    element_entry(atomic_number).map(|(symbol, _)| symbol)
}

/// Returns the IUPAC English element name for an atomic number
pub fn element_name(atomic_number: i32) -> Option<&'static str> {
    element_entry(atomic_number).map(|(_, name)| name)
}

/// Returns the atomic number for an element symbol
///
/// This function is case-insensitive and will handle both "Fe" and "FE".
/// Surrounding whitespace is ignored.
pub fn atomic_number_from_symbol(symbol: &str) -> Option<i32> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return None;
    }
    ELEMENTS
        .iter()
        .position(|(candidate, _)| candidate.eq_ignore_ascii_case(symbol))
        .map(|index| index as i32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_symbol() {
        assert_eq!(element_symbol(1), Some("H"));
        assert_eq!(element_symbol(26), Some("Fe"));
        assert_eq!(element_symbol(92), Some("U"));
        assert_eq!(element_symbol(118), Some("Og"));
        assert_eq!(element_symbol(0), None);
        assert_eq!(element_symbol(-8), None);
        assert_eq!(element_symbol(119), None);
    }

    #[test]
    fn test_element_name() {
        assert_eq!(element_name(1), Some("Hydrogen"));
        assert_eq!(element_name(13), Some("Aluminium"));
        assert_eq!(element_name(26), Some("Iron"));
        assert_eq!(element_name(55), Some("Caesium"));
        assert_eq!(element_name(118), Some("Oganesson"));
        assert_eq!(element_name(0), None);
        assert_eq!(element_name(119), None);
    }

    #[test]
    fn test_atomic_number_from_symbol() {
        assert_eq!(atomic_number_from_symbol("H"), Some(1));
        assert_eq!(atomic_number_from_symbol("h"), Some(1));
        assert_eq!(atomic_number_from_symbol("Fe"), Some(26));
        assert_eq!(atomic_number_from_symbol("fe"), Some(26));
        assert_eq!(atomic_number_from_symbol("FE"), Some(26));
        assert_eq!(atomic_number_from_symbol(" Og "), Some(118));
        assert_eq!(atomic_number_from_symbol("Xx"), None);
        assert_eq!(atomic_number_from_symbol(""), None);
    }

    #[test]
    fn test_symbol_round_trip() {
        for atomic_number in 1..=118 {
            let symbol = element_symbol(atomic_number).unwrap();
            assert_eq!(atomic_number_from_symbol(symbol), Some(atomic_number));
        }
    }
}

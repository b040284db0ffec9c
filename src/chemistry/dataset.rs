use crate::chemistry::category::Category::*;
use crate::chemistry::elements::{ELEMENT_COUNT, ElementRecord as E};

// Ordered by atomic number; `ElementRecord::by_atomic_number` indexes into it.
pub(crate) const ELEMENTS: [E; ELEMENT_COUNT] = [
    // --- Period 1 ---
    E::new(1, "H", "Hydrogen", 1.008, ReactiveNonmetal, Some(1), 1, "1", &[1], "1s1"),
    E::new(2, "He", "Helium", 4.0026, NobleGas, Some(18), 1, "0", &[2], "1s2"),
    // --- Period 2 ---
    E::new(3, "Li", "Lithium", 6.94, AlkaliMetal, Some(1), 2, "1", &[2, 1], "[He] 2s1"),
    E::new(4, "Be", "Beryllium", 9.0122, AlkalineEarthMetal, Some(2), 2, "2", &[2, 2], "[He] 2s2"),
    E::new(5, "B", "Boron", 10.81, Metalloid, Some(13), 2, "3", &[2, 3], "[He] 2s2 2p1"),
    E::new(6, "C", "Carbon", 12.011, ReactiveNonmetal, Some(14), 2, "2, 4", &[2, 4], "[He] 2s2 2p2"),
    E::new(7, "N", "Nitrogen", 14.007, ReactiveNonmetal, Some(15), 2, "3, 5", &[2, 5], "[He] 2s2 2p3"),
    E::new(8, "O", "Oxygen", 15.999, ReactiveNonmetal, Some(16), 2, "2", &[2, 6], "[He] 2s2 2p4"),
    E::new(9, "F", "Fluorine", 18.998, Halogen, Some(17), 2, "1", &[2, 7], "[He] 2s2 2p5"),
    E::new(10, "Ne", "Neon", 20.180, NobleGas, Some(18), 2, "0", &[2, 8], "[He] 2s2 2p6"),
    // --- Period 3 ---
    E::new(11, "Na", "Sodium", 22.990, AlkaliMetal, Some(1), 3, "1", &[2, 8, 1], "[Ne] 3s1"),
    E::new(12, "Mg", "Magnesium", 24.305, AlkalineEarthMetal, Some(2), 3, "2", &[2, 8, 2], "[Ne] 3s2"),
    E::new(13, "Al", "Aluminium", 26.982, PostTransitionMetal, Some(13), 3, "3", &[2, 8, 3], "[Ne] 3s2 3p1"),
    E::new(14, "Si", "Silicon", 28.085, Metalloid, Some(14), 3, "4", &[2, 8, 4], "[Ne] 3s2 3p2"),
    E::new(15, "P", "Phosphorus", 30.974, ReactiveNonmetal, Some(15), 3, "3, 5", &[2, 8, 5], "[Ne] 3s2 3p3"),
    E::new(16, "S", "Sulfur", 32.06, ReactiveNonmetal, Some(16), 3, "2, 4, 6", &[2, 8, 6], "[Ne] 3s2 3p4"),
    E::new(17, "Cl", "Chlorine", 35.45, Halogen, Some(17), 3, "1, 3, 5, 7", &[2, 8, 7], "[Ne] 3s2 3p5"),
    E::new(18, "Ar", "Argon", 39.948, NobleGas, Some(18), 3, "0", &[2, 8, 8], "[Ne] 3s2 3p6"),
    // --- Period 4 ---
    E::new(19, "K", "Potassium", 39.098, AlkaliMetal, Some(1), 4, "1", &[2, 8, 8, 1], "[Ar] 4s1"),
    E::new(20, "Ca", "Calcium", 40.078, AlkalineEarthMetal, Some(2), 4, "2", &[2, 8, 8, 2], "[Ar] 4s2"),
    E::new(21, "Sc", "Scandium", 44.956, TransitionMetal, Some(3), 4, "3", &[2, 8, 9, 2], "[Ar] 3d1 4s2"),
    E::new(22, "Ti", "Titanium", 47.867, TransitionMetal, Some(4), 4, "2, 3, 4", &[2, 8, 10, 2], "[Ar] 3d2 4s2"),
    E::new(23, "V", "Vanadium", 50.942, TransitionMetal, Some(5), 4, "2, 3, 4, 5", &[2, 8, 11, 2], "[Ar] 3d3 4s2"),
    E::new(24, "Cr", "Chromium", 51.996, TransitionMetal, Some(6), 4, "2, 3, 6", &[2, 8, 13, 1], "[Ar] 3d5 4s1"),
    E::new(25, "Mn", "Manganese", 54.938, TransitionMetal, Some(7), 4, "2, 3, 4, 6, 7", &[2, 8, 13, 2], "[Ar] 3d5 4s2"),
    E::new(26, "Fe", "Iron", 55.845, TransitionMetal, Some(8), 4, "2, 3", &[2, 8, 14, 2], "[Ar] 3d6 4s2"),
    E::new(27, "Co", "Cobalt", 58.933, TransitionMetal, Some(9), 4, "2, 3", &[2, 8, 15, 2], "[Ar] 3d7 4s2"),
    E::new(28, "Ni", "Nickel", 58.693, TransitionMetal, Some(10), 4, "2, 3", &[2, 8, 16, 2], "[Ar] 3d8 4s2"),
    E::new(29, "Cu", "Copper", 63.546, TransitionMetal, Some(11), 4, "1, 2", &[2, 8, 18, 1], "[Ar] 3d10 4s1"),
    E::new(30, "Zn", "Zinc", 65.38, TransitionMetal, Some(12), 4, "2", &[2, 8, 18, 2], "[Ar] 3d10 4s2"),
    E::new(31, "Ga", "Gallium", 69.723, PostTransitionMetal, Some(13), 4, "3", &[2, 8, 18, 3], "[Ar] 3d10 4s2 4p1"),
    E::new(32, "Ge", "Germanium", 72.630, Metalloid, Some(14), 4, "2, 4", &[2, 8, 18, 4], "[Ar] 3d10 4s2 4p2"),
    E::new(33, "As", "Arsenic", 74.922, Metalloid, Some(15), 4, "3, 5", &[2, 8, 18, 5], "[Ar] 3d10 4s2 4p3"),
    E::new(34, "Se", "Selenium", 78.971, ReactiveNonmetal, Some(16), 4, "2, 4, 6", &[2, 8, 18, 6], "[Ar] 3d10 4s2 4p4"),
    E::new(35, "Br", "Bromine", 79.904, Halogen, Some(17), 4, "1, 3, 5, 7", &[2, 8, 18, 7], "[Ar] 3d10 4s2 4p5"),
    E::new(36, "Kr", "Krypton", 83.798, NobleGas, Some(18), 4, "0, 2", &[2, 8, 18, 8], "[Ar] 3d10 4s2 4p6"),
    // --- Period 5 ---
    E::new(37, "Rb", "Rubidium", 85.468, AlkaliMetal, Some(1), 5, "1", &[2, 8, 18, 8, 1], "[Kr] 5s1"),
    E::new(38, "Sr", "Strontium", 87.62, AlkalineEarthMetal, Some(2), 5, "2", &[2, 8, 18, 8, 2], "[Kr] 5s2"),
    E::new(39, "Y", "Yttrium", 88.906, TransitionMetal, Some(3), 5, "3", &[2, 8, 18, 9, 2], "[Kr] 4d1 5s2"),
    E::new(40, "Zr", "Zirconium", 91.224, TransitionMetal, Some(4), 5, "4", &[2, 8, 18, 10, 2], "[Kr] 4d2 5s2"),
    E::new(41, "Nb", "Niobium", 92.906, TransitionMetal, Some(5), 5, "3, 5", &[2, 8, 18, 12, 1], "[Kr] 4d4 5s1"),
    E::new(42, "Mo", "Molybdenum", 95.95, TransitionMetal, Some(6), 5, "2, 3, 4, 5, 6", &[2, 8, 18, 13, 1], "[Kr] 4d5 5s1"),
    E::new(43, "Tc", "Technetium", 98.0, TransitionMetal, Some(7), 5, "4, 6, 7", &[2, 8, 18, 13, 2], "[Kr] 4d5 5s2"),
    E::new(44, "Ru", "Ruthenium", 101.07, TransitionMetal, Some(8), 5, "2, 3, 4, 6, 8", &[2, 8, 18, 15, 1], "[Kr] 4d7 5s1"),
    E::new(45, "Rh", "Rhodium", 102.91, TransitionMetal, Some(9), 5, "3", &[2, 8, 18, 16, 1], "[Kr] 4d8 5s1"),
    E::new(46, "Pd", "Palladium", 106.42, TransitionMetal, Some(10), 5, "2, 4", &[2, 8, 18, 18], "[Kr] 4d10"),
    E::new(47, "Ag", "Silver", 107.87, TransitionMetal, Some(11), 5, "1", &[2, 8, 18, 18, 1], "[Kr] 4d10 5s1"),
    E::new(48, "Cd", "Cadmium", 112.41, TransitionMetal, Some(12), 5, "2", &[2, 8, 18, 18, 2], "[Kr] 4d10 5s2"),
    E::new(49, "In", "Indium", 114.82, PostTransitionMetal, Some(13), 5, "1, 3", &[2, 8, 18, 18, 3], "[Kr] 4d10 5s2 5p1"),
    E::new(50, "Sn", "Tin", 118.71, PostTransitionMetal, Some(14), 5, "2, 4", &[2, 8, 18, 18, 4], "[Kr] 4d10 5s2 5p2"),
    E::new(51, "Sb", "Antimony", 121.76, Metalloid, Some(15), 5, "3, 5", &[2, 8, 18, 18, 5], "[Kr] 4d10 5s2 5p3"),
    E::new(52, "Te", "Tellurium", 127.60, Metalloid, Some(16), 5, "2, 4, 6", &[2, 8, 18, 18, 6], "[Kr] 4d10 5s2 5p4"),
    E::new(53, "I", "Iodine", 126.90, Halogen, Some(17), 5, "1, 3, 5, 7", &[2, 8, 18, 18, 7], "[Kr] 4d10 5s2 5p5"),
    E::new(54, "Xe", "Xenon", 131.29, NobleGas, Some(18), 5, "0, 2, 4, 6, 8", &[2, 8, 18, 18, 8], "[Kr] 4d10 5s2 5p6"),
    // --- Period 6 ---
    E::new(55, "Cs", "Caesium", 132.91, AlkaliMetal, Some(1), 6, "1", &[2, 8, 18, 18, 8, 1], "[Xe] 6s1"),
    E::new(56, "Ba", "Barium", 137.33, AlkalineEarthMetal, Some(2), 6, "2", &[2, 8, 18, 18, 8, 2], "[Xe] 6s2"),
    E::new(57, "La", "Lanthanum", 138.91, Lanthanide, None, 6, "3", &[2, 8, 18, 18, 9, 2], "[Xe] 5d1 6s2"),
    E::new(58, "Ce", "Cerium", 140.12, Lanthanide, None, 6, "3, 4", &[2, 8, 18, 19, 9, 2], "[Xe] 4f1 5d1 6s2"),
    E::new(59, "Pr", "Praseodymium", 140.91, Lanthanide, None, 6, "3", &[2, 8, 18, 21, 8, 2], "[Xe] 4f3 6s2"),
    E::new(60, "Nd", "Neodymium", 144.24, Lanthanide, None, 6, "3", &[2, 8, 18, 22, 8, 2], "[Xe] 4f4 6s2"),
    E::new(61, "Pm", "Promethium", 145.0, Lanthanide, None, 6, "3", &[2, 8, 18, 23, 8, 2], "[Xe] 4f5 6s2"),
    E::new(62, "Sm", "Samarium", 150.36, Lanthanide, None, 6, "2, 3", &[2, 8, 18, 24, 8, 2], "[Xe] 4f6 6s2"),
    E::new(63, "Eu", "Europium", 151.96, Lanthanide, None, 6, "2, 3", &[2, 8, 18, 25, 8, 2], "[Xe] 4f7 6s2"),
    E::new(64, "Gd", "Gadolinium", 157.25, Lanthanide, None, 6, "3", &[2, 8, 18, 25, 9, 2], "[Xe] 4f7 5d1 6s2"),
    E::new(65, "Tb", "Terbium", 158.93, Lanthanide, None, 6, "3, 4", &[2, 8, 18, 27, 8, 2], "[Xe] 4f9 6s2"),
    E::new(66, "Dy", "Dysprosium", 162.50, Lanthanide, None, 6, "3", &[2, 8, 18, 28, 8, 2], "[Xe] 4f10 6s2"),
    E::new(67, "Ho", "Holmium", 164.93, Lanthanide, None, 6, "3", &[2, 8, 18, 29, 8, 2], "[Xe] 4f11 6s2"),
    E::new(68, "Er", "Erbium", 167.26, Lanthanide, None, 6, "3", &[2, 8, 18, 30, 8, 2], "[Xe] 4f12 6s2"),
    E::new(69, "Tm", "Thulium", 168.93, Lanthanide, None, 6, "2, 3", &[2, 8, 18, 31, 8, 2], "[Xe] 4f13 6s2"),
    E::new(70, "Yb", "Ytterbium", 173.05, Lanthanide, None, 6, "2, 3", &[2, 8, 18, 32, 8, 2], "[Xe] 4f14 6s2"),
    E::new(71, "Lu", "Lutetium", 174.97, Lanthanide, None, 6, "3", &[2, 8, 18, 32, 9, 2], "[Xe] 4f14 5d1 6s2"),
    E::new(72, "Hf", "Hafnium", 178.49, TransitionMetal, Some(4), 6, "4", &[2, 8, 18, 32, 10, 2], "[Xe] 4f14 5d2 6s2"),
    E::new(73, "Ta", "Tantalum", 180.95, TransitionMetal, Some(5), 6, "5", &[2, 8, 18, 32, 11, 2], "[Xe] 4f14 5d3 6s2"),
    E::new(74, "W", "Tungsten", 183.84, TransitionMetal, Some(6), 6, "2, 3, 4, 5, 6", &[2, 8, 18, 32, 12, 2], "[Xe] 4f14 5d4 6s2"),
    E::new(75, "Re", "Rhenium", 186.21, TransitionMetal, Some(7), 6, "4, 6, 7", &[2, 8, 18, 32, 13, 2], "[Xe] 4f14 5d5 6s2"),
    E::new(76, "Os", "Osmium", 190.23, TransitionMetal, Some(8), 6, "2, 3, 4, 6, 8", &[2, 8, 18, 32, 14, 2], "[Xe] 4f14 5d6 6s2"),
    E::new(77, "Ir", "Iridium", 192.22, TransitionMetal, Some(9), 6, "3, 4", &[2, 8, 18, 32, 15, 2], "[Xe] 4f14 5d7 6s2"),
    E::new(78, "Pt", "Platinum", 195.08, TransitionMetal, Some(10), 6, "2, 4", &[2, 8, 18, 32, 17, 1], "[Xe] 4f14 5d9 6s1"),
    E::new(79, "Au", "Gold", 196.97, TransitionMetal, Some(11), 6, "1, 3", &[2, 8, 18, 32, 18, 1], "[Xe] 4f14 5d10 6s1"),
    E::new(80, "Hg", "Mercury", 200.59, TransitionMetal, Some(12), 6, "1, 2", &[2, 8, 18, 32, 18, 2], "[Xe] 4f14 5d10 6s2"),
    E::new(81, "Tl", "Thallium", 204.38, PostTransitionMetal, Some(13), 6, "1, 3", &[2, 8, 18, 32, 18, 3], "[Xe] 4f14 5d10 6s2 6p1"),
    E::new(82, "Pb", "Lead", 207.2, PostTransitionMetal, Some(14), 6, "2, 4", &[2, 8, 18, 32, 18, 4], "[Xe] 4f14 5d10 6s2 6p2"),
    E::new(83, "Bi", "Bismuth", 208.98, PostTransitionMetal, Some(15), 6, "3, 5", &[2, 8, 18, 32, 18, 5], "[Xe] 4f14 5d10 6s2 6p3"),
    E::new(84, "Po", "Polonium", 209.0, PostTransitionMetal, Some(16), 6, "2, 4", &[2, 8, 18, 32, 18, 6], "[Xe] 4f14 5d10 6s2 6p4"),
    E::new(85, "At", "Astatine", 210.0, Halogen, Some(17), 6, "1, 3, 5, 7", &[2, 8, 18, 32, 18, 7], "[Xe] 4f14 5d10 6s2 6p5"),
    E::new(86, "Rn", "Radon", 222.0, NobleGas, Some(18), 6, "0, 2", &[2, 8, 18, 32, 18, 8], "[Xe] 4f14 5d10 6s2 6p6"),
    // --- Period 7 ---
    E::new(87, "Fr", "Francium", 223.0, AlkaliMetal, Some(1), 7, "1", &[2, 8, 18, 32, 18, 8, 1], "[Rn] 7s1"),
    E::new(88, "Ra", "Radium", 226.0, AlkalineEarthMetal, Some(2), 7, "2", &[2, 8, 18, 32, 18, 8, 2], "[Rn] 7s2"),
    E::new(89, "Ac", "Actinium", 227.0, Actinide, None, 7, "3", &[2, 8, 18, 32, 18, 9, 2], "[Rn] 6d1 7s2"),
    E::new(90, "Th", "Thorium", 232.04, Actinide, None, 7, "4", &[2, 8, 18, 32, 18, 10, 2], "[Rn] 6d2 7s2"),
    E::new(91, "Pa", "Protactinium", 231.04, Actinide, None, 7, "4, 5", &[2, 8, 18, 32, 20, 9, 2], "[Rn] 5f2 6d1 7s2"),
    E::new(92, "U", "Uranium", 238.03, Actinide, None, 7, "3, 4, 5, 6", &[2, 8, 18, 32, 21, 9, 2], "[Rn] 5f3 6d1 7s2"),
    E::new(93, "Np", "Neptunium", 237.0, Actinide, None, 7, "3, 4, 5, 6, 7", &[2, 8, 18, 32, 22, 9, 2], "[Rn] 5f4 6d1 7s2"),
    E::new(94, "Pu", "Plutonium", 244.0, Actinide, None, 7, "3, 4, 5, 6", &[2, 8, 18, 32, 24, 8, 2], "[Rn] 5f6 7s2"),
    E::new(95, "Am", "Americium", 243.0, Actinide, None, 7, "3, 4, 5, 6", &[2, 8, 18, 32, 25, 8, 2], "[Rn] 5f7 7s2"),
    E::new(96, "Cm", "Curium", 247.0, Actinide, None, 7, "3, 4", &[2, 8, 18, 32, 25, 9, 2], "[Rn] 5f7 6d1 7s2"),
    E::new(97, "Bk", "Berkelium", 247.0, Actinide, None, 7, "3, 4", &[2, 8, 18, 32, 27, 8, 2], "[Rn] 5f9 7s2"),
    E::new(98, "Cf", "Californium", 251.0, Actinide, None, 7, "2, 3, 4", &[2, 8, 18, 32, 28, 8, 2], "[Rn] 5f10 7s2"),
    E::new(99, "Es", "Einsteinium", 252.0, Actinide, None, 7, "2, 3", &[2, 8, 18, 32, 29, 8, 2], "[Rn] 5f11 7s2"),
    E::new(100, "Fm", "Fermium", 257.0, Actinide, None, 7, "2, 3", &[2, 8, 18, 32, 30, 8, 2], "[Rn] 5f12 7s2"),
    E::new(101, "Md", "Mendelevium", 258.0, Actinide, None, 7, "2, 3", &[2, 8, 18, 32, 31, 8, 2], "[Rn] 5f13 7s2"),
    E::new(102, "No", "Nobelium", 259.0, Actinide, None, 7, "2, 3", &[2, 8, 18, 32, 32, 8, 2], "[Rn] 5f14 7s2"),
    E::new(103, "Lr", "Lawrencium", 266.0, Actinide, None, 7, "3", &[2, 8, 18, 32, 32, 8, 3], "[Rn] 5f14 7s2 7p1"),
    E::new(104, "Rf", "Rutherfordium", 267.0, TransitionMetal, Some(4), 7, "4", &[2, 8, 18, 32, 32, 10, 2], "[Rn] 5f14 6d2 7s2"),
    E::new(105, "Db", "Dubnium", 268.0, TransitionMetal, Some(5), 7, "5", &[2, 8, 18, 32, 32, 11, 2], "[Rn] 5f14 6d3 7s2"),
    E::new(106, "Sg", "Seaborgium", 269.0, TransitionMetal, Some(6), 7, "6", &[2, 8, 18, 32, 32, 12, 2], "[Rn] 5f14 6d4 7s2"),
    E::new(107, "Bh", "Bohrium", 270.0, TransitionMetal, Some(7), 7, "7", &[2, 8, 18, 32, 32, 13, 2], "[Rn] 5f14 6d5 7s2"),
    E::new(108, "Hs", "Hassium", 277.0, TransitionMetal, Some(8), 7, "8", &[2, 8, 18, 32, 32, 14, 2], "[Rn] 5f14 6d6 7s2"),
    E::new(109, "Mt", "Meitnerium", 278.0, Unknown, Some(9), 7, "unknown", &[2, 8, 18, 32, 32, 15, 2], "[Rn] 5f14 6d7 7s2"),
    E::new(110, "Ds", "Darmstadtium", 281.0, Unknown, Some(10), 7, "unknown", &[2, 8, 18, 32, 32, 16, 2], "[Rn] 5f14 6d8 7s2"),
    E::new(111, "Rg", "Roentgenium", 282.0, Unknown, Some(11), 7, "unknown", &[2, 8, 18, 32, 32, 17, 2], "[Rn] 5f14 6d9 7s2"),
    E::new(112, "Cn", "Copernicium", 285.0, Unknown, Some(12), 7, "2", &[2, 8, 18, 32, 32, 18, 2], "[Rn] 5f14 6d10 7s2"),
    E::new(113, "Nh", "Nihonium", 286.0, Unknown, Some(13), 7, "unknown", &[2, 8, 18, 32, 32, 18, 3], "[Rn] 5f14 6d10 7s2 7p1"),
    E::new(114, "Fl", "Flerovium", 289.0, Unknown, Some(14), 7, "unknown", &[2, 8, 18, 32, 32, 18, 4], "[Rn] 5f14 6d10 7s2 7p2"),
    E::new(115, "Mc", "Moscovium", 290.0, Unknown, Some(15), 7, "unknown", &[2, 8, 18, 32, 32, 18, 5], "[Rn] 5f14 6d10 7s2 7p3"),
    E::new(116, "Lv", "Livermorium", 293.0, Unknown, Some(16), 7, "unknown", &[2, 8, 18, 32, 32, 18, 6], "[Rn] 5f14 6d10 7s2 7p4"),
    E::new(117, "Ts", "Tennessine", 294.0, Unknown, Some(17), 7, "unknown", &[2, 8, 18, 32, 32, 18, 7], "[Rn] 5f14 6d10 7s2 7p5"),
    E::new(118, "Og", "Oganesson", 294.0, Unknown, Some(18), 7, "unknown", &[2, 8, 18, 32, 32, 18, 8], "[Rn] 5f14 6d10 7s2 7p6"),
];

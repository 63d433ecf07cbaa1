/// Hartree in electronvolts
pub const HARTREE_TO_EV: f64 = 27.211386245988;

/// Hartree in wavenumbers (cm⁻¹)
pub const HARTREE_TO_CM: f64 = 219474.6313705;

/// Hartree in kJ/mol
pub const HARTREE_TO_KJ: f64 = 2625.499638;

/// Thermochemical calorie
pub const KJ_PER_KCAL: f64 = 4.184;

/// Hartree in kcal/mol
pub const HARTREE_TO_KCAL: f64 = HARTREE_TO_KJ / KJ_PER_KCAL;

/// Photon energy times wavelength, in eV·nm (h·c)
pub const EV_TO_NM: f64 = 1239.841984;

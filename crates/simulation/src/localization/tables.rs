use super::StringTable;

fn table(entries: &[(&str, &str)]) -> StringTable {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// =============================================================================
// English (complete UI strings; names come from the definition table)
// =============================================================================

pub(super) fn build_english_table() -> StringTable {
    table(&[
        ("ui.language", "Language"),
        ("ui.statistics.title", "Statistics"),
        ("ui.statistics.resources", "Resources"),
        ("ui.statistics.buildings", "Buildings"),
        ("ui.statistics.transportation", "Transportation"),
        ("ui.statistics.show_theoretical", "Show Theoretical Value"),
        ("ui.statistics.resource", "Resource"),
        ("ui.statistics.amount", "Amount"),
        ("ui.statistics.output", "Output"),
        ("ui.statistics.input", "Input"),
        ("ui.statistics.building", "Building"),
        ("ui.statistics.level", "Level"),
        ("ui.statistics.fuel", "Fuel"),
        ("ui.statistics.workers", "Workers"),
        ("ui.statistics.progress", "Progress"),
        (
            "ui.statistics.transportation_percentage",
            "Workers used in transportation",
        ),
        ("ui.statistics.not_applicable", "N/A"),
        ("ui.statistics.operational", "Operational"),
        ("ui.statistics.under_construction", "Under construction"),
        ("ui.statistics.storage_full", "Storage full"),
        ("ui.statistics.blocked", "Not producing"),
        ("ui.statistics.electrified", "Electrified"),
        ("ui.statistics.enough_fuel", "Enough fuel"),
        ("ui.statistics.not_enough_fuel", "Not enough fuel"),
        ("ui.statistics.short_staffed", "Not enough workers"),
        ("ui.statistics.deficit", "Consumption exceeds production"),
        ("ui.statistics.look_at", "Click to look at this building"),
        ("ui.statistics.building_color", "Building Color"),
        ("ui.statistics.reset_color", "Reset"),
    ])
}

// =============================================================================
// German
// =============================================================================

pub(super) fn build_german_table() -> StringTable {
    table(&[
        ("ui.language", "Sprache"),
        ("ui.statistics.title", "Statistik"),
        ("ui.statistics.resources", "Ressourcen"),
        ("ui.statistics.buildings", "Gebäude"),
        ("ui.statistics.transportation", "Transport"),
        ("ui.statistics.show_theoretical", "Theoretischen Wert zeigen"),
        ("ui.statistics.resource", "Ressource"),
        ("ui.statistics.amount", "Menge"),
        ("ui.statistics.output", "Produktion"),
        ("ui.statistics.input", "Verbrauch"),
        ("ui.statistics.building", "Gebäude"),
        ("ui.statistics.level", "Stufe"),
        ("ui.statistics.fuel", "Treibstoff"),
        ("ui.statistics.workers", "Arbeiter"),
        ("ui.statistics.progress", "Fortschritt"),
        (
            "ui.statistics.transportation_percentage",
            "Arbeiter im Transport",
        ),
        ("ui.statistics.not_applicable", "k. A."),
        ("ui.statistics.building_color", "Gebäudefarbe"),
        ("ui.statistics.reset_color", "Zurücksetzen"),
        ("building.Headquarter", "Hauptquartier"),
        ("building.StatisticsOffice", "Statistikamt"),
        ("building.LoggingCamp", "Holzfällerlager"),
        ("building.StoneQuarry", "Steinbruch"),
        ("building.Aqueduct", "Aquädukt"),
        ("building.WheatFarm", "Weizenfarm"),
        ("building.Bakery", "Bäckerei"),
        ("building.FishPond", "Fischteich"),
        ("building.Dairy", "Molkerei"),
        ("building.CheeseMaker", "Käserei"),
        ("building.CopperMiningCamp", "Kupfermine"),
        ("building.IronMiningCamp", "Eisenmine"),
        ("building.CoalMine", "Kohlebergwerk"),
        ("building.Blacksmith", "Schmiede"),
        ("building.CoalPowerPlant", "Kohlekraftwerk"),
        ("building.Library", "Bibliothek"),
        ("building.Warehouse", "Lagerhaus"),
        ("resource.Wood", "Holz"),
        ("resource.Stone", "Stein"),
        ("resource.Water", "Wasser"),
        ("resource.Wheat", "Weizen"),
        ("resource.Bread", "Brot"),
        ("resource.Fish", "Fisch"),
        ("resource.Milk", "Milch"),
        ("resource.Cheese", "Käse"),
        ("resource.Copper", "Kupfer"),
        ("resource.Iron", "Eisen"),
        ("resource.Coal", "Kohle"),
        ("resource.Tool", "Werkzeug"),
        ("resource.Power", "Strom"),
        ("resource.Science", "Wissenschaft"),
        ("resource.Worker", "Arbeiter"),
    ])
}

// =============================================================================
// French
// =============================================================================

pub(super) fn build_french_table() -> StringTable {
    table(&[
        ("ui.language", "Langue"),
        ("ui.statistics.title", "Statistiques"),
        ("ui.statistics.resources", "Ressources"),
        ("ui.statistics.buildings", "Bâtiments"),
        ("ui.statistics.transportation", "Transport"),
        ("ui.statistics.show_theoretical", "Afficher la valeur théorique"),
        ("ui.statistics.resource", "Ressource"),
        ("ui.statistics.amount", "Quantité"),
        ("ui.statistics.output", "Production"),
        ("ui.statistics.input", "Consommation"),
        ("ui.statistics.building", "Bâtiment"),
        ("ui.statistics.level", "Niveau"),
        ("ui.statistics.fuel", "Carburant"),
        ("ui.statistics.workers", "Ouvriers"),
        ("ui.statistics.progress", "Progression"),
        (
            "ui.statistics.transportation_percentage",
            "Ouvriers affectés au transport",
        ),
        ("ui.statistics.not_applicable", "N/D"),
        ("ui.statistics.building_color", "Couleur du bâtiment"),
        ("ui.statistics.reset_color", "Réinitialiser"),
        ("building.Headquarter", "Quartier général"),
        ("building.StatisticsOffice", "Bureau des statistiques"),
        ("building.LoggingCamp", "Camp de bûcherons"),
        ("building.StoneQuarry", "Carrière"),
        ("building.Aqueduct", "Aqueduc"),
        ("building.WheatFarm", "Ferme de blé"),
        ("building.Bakery", "Boulangerie"),
        ("building.FishPond", "Étang à poissons"),
        ("building.Dairy", "Laiterie"),
        ("building.CheeseMaker", "Fromagerie"),
        ("building.CopperMiningCamp", "Mine de cuivre"),
        ("building.IronMiningCamp", "Mine de fer"),
        ("building.CoalMine", "Mine de charbon"),
        ("building.Blacksmith", "Forge"),
        ("building.CoalPowerPlant", "Centrale à charbon"),
        ("building.Library", "Bibliothèque"),
        ("building.Warehouse", "Entrepôt"),
        ("resource.Wood", "Bois"),
        ("resource.Stone", "Pierre"),
        ("resource.Water", "Eau"),
        ("resource.Wheat", "Blé"),
        ("resource.Bread", "Pain"),
        ("resource.Fish", "Poisson"),
        ("resource.Milk", "Lait"),
        ("resource.Cheese", "Fromage"),
        ("resource.Copper", "Cuivre"),
        ("resource.Iron", "Fer"),
        ("resource.Coal", "Charbon"),
        ("resource.Tool", "Outil"),
        ("resource.Power", "Électricité"),
        ("resource.Science", "Science"),
        ("resource.Worker", "Ouvrier"),
    ])
}

//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::Vec2;

use super::rom_manager::TreeKind;
use crate::core::{ActorRef, NodeId, Scenario, SelectionChange};
use crate::shared::PaintOption;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// RomFS-Ordner wählen (zeigt Ordnerdialog)
    SelectRomRequested,
    /// RomFS-Ordner wurde im Dialog gewählt
    RomDirectorySelected { path: String },
    /// Szenario aus dem Menü öffnen
    OpenScenarioRequested { scenario: Scenario },
    /// Anwendung beenden
    ExitRequested,
    /// Zeichen-Option im Menü umgeschaltet
    PaintOptionToggled { option: PaintOption, enabled: bool },

    /// Kamera auf das ganze Szenario zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<Vec2>,
    },

    /// Doppelklick in die Szene: nächsten Actor umschalten
    ActorPickRequested { world_pos: Vec2 },
    /// Rechtsklick in die Szene: Actors unter dem Cursor abwählen
    ActorUnselectAtRequested { world_pos: Vec2 },
    /// Mauszeiger bewegt (`None` = außerhalb der Szene)
    PointerMoved { world_pos: Option<Vec2> },

    /// Checkbox eines Baumknotens umgeschaltet
    TreeCheckToggled {
        tree: TreeKind,
        node: NodeId,
        checked: bool,
    },
    /// Doppelklick auf einen Baumknoten
    TreeNodeActivated { tree: TreeKind, node: NodeId },
    /// Maus über einem Baumknoten (oder verlassen)
    TreeNodeHovered {
        tree: TreeKind,
        node: NodeId,
        hovered: bool,
    },
    /// Baumknoten auf- oder zugeklappt
    TreeNodeExpanded {
        tree: TreeKind,
        node: NodeId,
        expanded: bool,
    },
    /// Sichtbare Actor-Liste gewechselt
    TreeTabSelected { tree: TreeKind },

    /// Doppelklick im Detail-Panel; `path` adressiert den Knoten im Datensatz
    DataNodeActivated { actor: ActorRef, path: Vec<usize> },
    /// Statusnachricht schließen
    StatusDismissed,
}

/// Mutierende Commands, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// RomFS-Ordnerdialog öffnen
    RequestRomDialog,
    /// RomFS wählen und bei Erfolg in den Optionen merken
    SelectRom { path: String },
    /// Szenario laden
    OpenScenario { scenario: Scenario },
    /// Anwendung beenden
    RequestExit,
    /// Zeichen-Option setzen und persistieren
    SetPaintOption { option: PaintOption, enabled: bool },

    /// Kamera auf das Szenario einpassen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f32,
        focus_world: Option<Vec2>,
    },

    /// Selektion eines Actors ändern
    SetActorSelection {
        actor: ActorRef,
        change: SelectionChange,
    },
    /// Hover auf einen Actor legen (`None` = keiner)
    SetHoveredActor { actor: Option<ActorRef> },
    /// Collision-Kamera einer Subarea zeigen
    SelectCamera {
        setup_id: String,
        subarea_id: String,
    },

    /// Check-Zustand eines Baumknotens setzen
    SetTreeChecked {
        tree: TreeKind,
        node: NodeId,
        checked: bool,
    },
    /// Baumknoten aktivieren (Blatt: Selektion umschalten)
    ActivateTreeNode { tree: TreeKind, node: NodeId },
    /// Hover auf einen Baumknoten setzen
    SetTreeHovered {
        tree: TreeKind,
        node: NodeId,
        hovered: bool,
    },
    /// Baumknoten auf- oder zuklappen
    SetTreeExpanded {
        tree: TreeKind,
        node: NodeId,
        expanded: bool,
    },
    /// Sichtbare Actor-Liste setzen
    SetActiveTree { tree: TreeKind },
    /// Statusnachricht entfernen
    ClearStatus,
}

/// Names of the line icons used across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    ArrowDownRight,
    Award,
    Briefcase,
    Building,
    Check,
    CheckCircle,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    ClipboardList,
    Clock,
    Download,
    FileText,
    Gauge,
    Image,
    Layers,
    Leaf,
    Mail,
    MapPin,
    Menu,
    Phone,
    PlayCircle,
    Quote,
    Search,
    Send,
    Settings,
    Shield,
    ShieldCheck,
    Sparkles,
    TrendingUp,
    Truck,
    X,
}

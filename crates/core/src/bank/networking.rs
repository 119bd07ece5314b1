use super::QuestionSeed;

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "net-01",
        tag: "osi",
        text: "At which OSI layer does IP operate?",
        options: &["Layer 7", "Layer 2", "Layer 3", "Layer 4"],
        correct: 2,
        explanation: "IP is the network layer protocol responsible for routing.",
    },
    QuestionSeed {
        id: "net-02",
        tag: "osi",
        text: "TCP and UDP belong to which OSI layer?",
        options: &["Data link", "Transport", "Session", "Network"],
        correct: 1,
        explanation: "Both are layer 4 transport protocols.",
    },
    QuestionSeed {
        id: "net-03",
        tag: "tcp",
        text: "What is the correct order of the TCP three-way handshake?",
        options: &["SYN, SYN-ACK, ACK", "ACK, SYN, FIN", "SYN-ACK, SYN, ACK", "SYN, ACK, SYN-ACK"],
        correct: 0,
        explanation: "The client sends SYN, the server replies SYN-ACK, the client confirms with ACK.",
    },
    QuestionSeed {
        id: "net-04",
        tag: "ports",
        text: "Which port does HTTPS use by default?",
        options: &["443", "22", "80", "8080"],
        correct: 0,
        explanation: "HTTPS listens on TCP 443.",
    },
    QuestionSeed {
        id: "net-05",
        tag: "ports",
        text: "DNS queries typically use which port?",
        options: &["110", "161", "25", "53"],
        correct: 3,
        explanation: "DNS uses port 53 over UDP, and TCP for large responses and zone transfers.",
    },
    QuestionSeed {
        id: "net-06",
        tag: "ports",
        text: "Which protocol uses port 3389?",
        options: &["SNMP", "SMB", "RDP", "LDAP"],
        correct: 2,
        explanation: "Remote Desktop Protocol listens on 3389 and is often targeted by brute force.",
    },
    QuestionSeed {
        id: "net-07",
        tag: "ports",
        text: "SMB file sharing on modern Windows uses port:",
        options: &["993", "139", "445", "21"],
        correct: 2,
        explanation: "SMB runs directly over TCP 445.",
    },
    QuestionSeed {
        id: "net-08",
        tag: "protocols",
        text: "Which protocol transmits credentials in cleartext and should be replaced by SSH?",
        options: &["SFTP", "Telnet", "HTTPS", "IMAPS"],
        correct: 1,
        explanation: "Telnet sends everything, including passwords, unencrypted.",
    },
    QuestionSeed {
        id: "net-09",
        tag: "protocols",
        text: "ARP maps:",
        options: &[
            "IP addresses to MAC addresses",
            "Domain names to IP addresses",
            "Ports to services",
            "MAC addresses to VLANs",
        ],
        correct: 0,
        explanation: "ARP resolves layer 3 addresses to layer 2 hardware addresses on a LAN.",
    },
    QuestionSeed {
        id: "net-10",
        tag: "attacks",
        text: "ARP spoofing enables which attack?",
        options: &[
            "Man-in-the-middle on the local network",
            "SQL injection",
            "Buffer overflow",
            "DNS tunneling",
        ],
        correct: 0,
        explanation: "Forged ARP replies redirect traffic through the attacker's machine.",
    },
    QuestionSeed {
        id: "net-11",
        tag: "attacks",
        text: "A SYN flood attack exhausts:",
        options: &[
            "The client's DNS cache",
            "Disk space",
            "The switch's MAC table",
            "The server's half-open connection table",
        ],
        correct: 3,
        explanation: "Unanswered SYNs keep server resources tied up until they time out.",
    },
    QuestionSeed {
        id: "net-12",
        tag: "attacks",
        text: "MAC flooding against a switch aims to:",
        options: &[
            "Crash DHCP servers",
            "Disable VLAN tagging",
            "Make the switch fail open and broadcast frames like a hub",
            "Change the switch's IP",
        ],
        correct: 2,
        explanation: "An overflowing CAM table causes unknown-destination frames to be flooded to all ports.",
    },
    QuestionSeed {
        id: "net-13",
        tag: "attacks",
        text: "DNS cache poisoning results in:",
        options: &[
            "Encrypted DNS traffic",
            "Loss of DHCP leases",
            "Clients being directed to attacker-controlled IPs",
            "Faster DNS lookups",
        ],
        correct: 2,
        explanation: "Forged records in a resolver cache redirect all users of that resolver.",
    },
    QuestionSeed {
        id: "net-14",
        tag: "dns",
        text: "DNSSEC provides:",
        options: &[
            "Confidentiality of DNS queries",
            "Authenticity and integrity of DNS responses",
            "Load balancing",
            "Faster resolution",
        ],
        correct: 1,
        explanation: "DNSSEC signs records; it does not encrypt them.",
    },
    QuestionSeed {
        id: "net-15",
        tag: "dns",
        text: "Which record type maps a domain to an IPv6 address?",
        options: &["AAAA", "MX", "CNAME", "A"],
        correct: 0,
        explanation: "AAAA records hold IPv6 addresses.",
    },
    QuestionSeed {
        id: "net-16",
        tag: "addressing",
        text: "How many usable host addresses are in a /24 IPv4 subnet?",
        options: &["254", "255", "128", "256"],
        correct: 0,
        explanation: "Network and broadcast addresses are reserved, leaving 254.",
    },
    QuestionSeed {
        id: "net-17",
        tag: "addressing",
        text: "Which range is private per RFC 1918?",
        options: &["8.8.8.0/24", "100.64.0.0/10", "169.254.0.0/16", "172.16.0.0/12"],
        correct: 3,
        explanation: "RFC 1918 reserves 10/8, 172.16/12, and 192.168/16.",
    },
    QuestionSeed {
        id: "net-18",
        tag: "addressing",
        text: "An address in 169.254.0.0/16 usually indicates:",
        options: &[
            "A multicast group",
            "A loopback interface",
            "A host that failed to get a DHCP lease",
            "A public web server",
        ],
        correct: 2,
        explanation: "Link-local addresses are self-assigned when DHCP is unavailable.",
    },
    QuestionSeed {
        id: "net-19",
        tag: "firewalls",
        text: "A stateful firewall differs from a stateless one because it:",
        options: &[
            "Cannot filter ports",
            "Works only at layer 7",
            "Tracks connection state and allows return traffic automatically",
            "Inspects only source IPs",
        ],
        correct: 2,
        explanation: "Stateful inspection remembers established flows.",
    },
    QuestionSeed {
        id: "net-20",
        tag: "firewalls",
        text: "A web application firewall (WAF) primarily inspects:",
        options: &["BGP routes", "HTTP requests and responses", "ARP traffic", "Wi-Fi beacons"],
        correct: 1,
        explanation: "WAFs filter application-layer web traffic for attacks like SQLi and XSS.",
    },
    QuestionSeed {
        id: "net-21",
        tag: "segmentation",
        text: "Placing public-facing servers in a DMZ:",
        options: &[
            "Isolates them from the internal network",
            "Removes the need for patches",
            "Encrypts their traffic",
            "Gives them direct access to internal databases",
        ],
        correct: 0,
        explanation: "A compromised DMZ host cannot freely reach internal systems.",
    },
    QuestionSeed {
        id: "net-22",
        tag: "segmentation",
        text: "VLANs provide:",
        options: &[
            "Logical separation of broadcast domains",
            "Encryption between switches",
            "Wireless authentication",
            "IP address assignment",
        ],
        correct: 0,
        explanation: "VLANs segment a switched network at layer 2.",
    },
    QuestionSeed {
        id: "net-23",
        tag: "attacks",
        text: "VLAN hopping via double tagging exploits:",
        options: &[
            "Weak Wi-Fi passwords",
            "Open DNS resolvers",
            "Expired certificates",
            "The native VLAN on trunk ports",
        ],
        correct: 3,
        explanation: "Frames tagged for the native VLAN get the outer tag stripped and are forwarded on the inner VLAN.",
    },
    QuestionSeed {
        id: "net-24",
        tag: "scanning",
        text: "What does `nmap -sS` perform?",
        options: &[
            "A ping sweep only",
            "OS fingerprinting only",
            "A TCP SYN (half-open) scan",
            "A UDP scan",
        ],
        correct: 2,
        explanation: "SYN scans never complete the handshake, which makes them fast and less noisy.",
    },
    QuestionSeed {
        id: "net-25",
        tag: "scanning",
        text: "A port reported as \"filtered\" by nmap means:",
        options: &[
            "The port is closed with RST",
            "The host is down",
            "A firewall is dropping probes so state cannot be determined",
            "The port is open",
        ],
        correct: 2,
        explanation: "No response (or ICMP unreachable) suggests packet filtering.",
    },
    QuestionSeed {
        id: "net-26",
        tag: "analysis",
        text: "Which tool is commonly used to capture and analyze packets graphically?",
        options: &["Metasploit", "Wireshark", "John the Ripper", "Hydra"],
        correct: 1,
        explanation: "Wireshark decodes hundreds of protocols from live or saved captures.",
    },
    QuestionSeed {
        id: "net-27",
        tag: "analysis",
        text: "Promiscuous mode on a network card allows it to:",
        options: &[
            "Capture frames not addressed to it",
            "Transmit at higher speed",
            "Bypass firewalls",
            "Use multiple IPs",
        ],
        correct: 0,
        explanation: "Sniffers need promiscuous mode to see other hosts' traffic on shared segments.",
    },
    QuestionSeed {
        id: "net-28",
        tag: "tls",
        text: "TLS provides which properties for a connection?",
        options: &[
            "Confidentiality, integrity, and server authentication",
            "Only compression",
            "Anonymity of the client",
            "Guaranteed delivery",
        ],
        correct: 0,
        explanation: "TLS encrypts, authenticates, and integrity-protects the stream.",
    },
    QuestionSeed {
        id: "net-29",
        tag: "tls",
        text: "Which TLS versions should be disabled today?",
        options: &["TLS 1.2", "TLS 1.3", "All of them", "TLS 1.0 and 1.1"],
        correct: 3,
        explanation: "TLS 1.0/1.1 are deprecated (RFC 8996).",
    },
    QuestionSeed {
        id: "net-30",
        tag: "vpn",
        text: "A VPN primarily provides:",
        options: &[
            "Antivirus scanning",
            "Static IP allocation",
            "An encrypted tunnel over an untrusted network",
            "Faster internet speeds",
        ],
        correct: 2,
        explanation: "VPNs protect traffic between endpoints across public networks.",
    },
    QuestionSeed {
        id: "net-31",
        tag: "vpn",
        text: "IPsec operates at which layer?",
        options: &["Physical layer", "Presentation layer", "Network layer", "Application layer"],
        correct: 2,
        explanation: "IPsec secures IP packets themselves.",
    },
    QuestionSeed {
        id: "net-32",
        tag: "wireless",
        text: "Which Wi-Fi security protocol is current best practice?",
        options: &["WPA2-TKIP", "WPA3", "WEP", "WPA"],
        correct: 1,
        explanation: "WPA3 adds SAE, protecting against offline dictionary attacks.",
    },
    QuestionSeed {
        id: "net-33",
        tag: "wireless",
        text: "An \"evil twin\" attack involves:",
        options: &[
            "A rogue access point mimicking a legitimate SSID",
            "Two identical MAC addresses on a switch",
            "Duplicate DNS records",
            "Cloning a hard drive",
        ],
        correct: 0,
        explanation: "Victims connect to the attacker's AP and their traffic can be intercepted.",
    },
    QuestionSeed {
        id: "net-34",
        tag: "wireless",
        text: "A deauthentication attack against Wi-Fi clients:",
        options: &[
            "Forces clients to disconnect, often to capture handshakes",
            "Encrypts all traffic",
            "Changes the channel",
            "Upgrades the firmware",
        ],
        correct: 0,
        explanation: "Spoofed deauth frames kick clients off so they reconnect.",
    },
    QuestionSeed {
        id: "net-35",
        tag: "ids",
        text: "An IDS differs from an IPS in that it:",
        options: &[
            "Blocks all traffic by default",
            "Only works on wireless networks",
            "Replaces the firewall",
            "Detects and alerts but does not block inline",
        ],
        correct: 3,
        explanation: "IPS sits inline and can drop traffic; IDS monitors passively.",
    },
    QuestionSeed {
        id: "net-36",
        tag: "ids",
        text: "Signature-based detection struggles most with:",
        options: &["Port scans", "Cleartext passwords", "Zero-day attacks", "Known malware"],
        correct: 2,
        explanation: "There is no signature for an attack nobody has seen yet.",
    },
    QuestionSeed {
        id: "net-37",
        tag: "icmp",
        text: "Which tool uses ICMP echo requests to test reachability?",
        options: &["curl", "netcat", "ping", "dig"],
        correct: 2,
        explanation: "ping sends echo requests and measures replies.",
    },
    QuestionSeed {
        id: "net-38",
        tag: "icmp",
        text: "traceroute discovers the path to a host by manipulating:",
        options: &["The DNS TTL", "The IP TTL field", "The TCP window", "The MAC address"],
        correct: 1,
        explanation: "Each router decrements TTL and replies with Time Exceeded at zero.",
    },
    QuestionSeed {
        id: "net-39",
        tag: "nat",
        text: "NAT allows:",
        options: &[
            "Many private hosts to share one public IP",
            "Encryption of packets",
            "Faster routing",
            "Automatic DNS registration",
        ],
        correct: 0,
        explanation: "Network address translation rewrites addresses at the network edge.",
    },
    QuestionSeed {
        id: "net-40",
        tag: "attacks",
        text: "A DDoS attack differs from a DoS attack because it:",
        options: &[
            "Originates from many distributed sources",
            "Targets only DNS",
            "Requires physical access",
            "Is always encrypted",
        ],
        correct: 0,
        explanation: "Distributed attacks use botnets, making source filtering hard.",
    },
    QuestionSeed {
        id: "net-41",
        tag: "attacks",
        text: "DNS amplification attacks abuse:",
        options: &[
            "Weak TLS ciphers",
            "Misconfigured VLANs",
            "ARP caches",
            "Open resolvers returning large responses to spoofed sources",
        ],
        correct: 3,
        explanation: "Small spoofed queries trigger large answers directed at the victim.",
    },
    QuestionSeed {
        id: "net-42",
        tag: "protocols",
        text: "SNMPv1 and v2c are considered insecure because:",
        options: &[
            "They require root",
            "They do not support traps",
            "Community strings are sent in cleartext",
            "They use TCP",
        ],
        correct: 2,
        explanation: "SNMPv3 adds authentication and encryption.",
    },
    QuestionSeed {
        id: "net-43",
        tag: "protocols",
        text: "Which protocol securely transfers files over SSH?",
        options: &["FTP", "TFTP", "SFTP", "HTTP"],
        correct: 2,
        explanation: "SFTP runs as an SSH subsystem.",
    },
    QuestionSeed {
        id: "net-44",
        tag: "protocols",
        text: "DHCP starvation attacks aim to:",
        options: &[
            "Change DNS TTLs",
            "Exhaust the DHCP address pool",
            "Speed up lease renewal",
            "Encrypt DHCP offers",
        ],
        correct: 1,
        explanation: "With the pool empty, a rogue DHCP server can serve clients instead.",
    },
    QuestionSeed {
        id: "net-45",
        tag: "defense",
        text: "Which switch feature blocks rogue DHCP servers?",
        options: &["DHCP snooping", "Spanning tree", "Port mirroring", "Jumbo frames"],
        correct: 0,
        explanation: "Only trusted ports may send DHCP offers.",
    },
    QuestionSeed {
        id: "net-46",
        tag: "defense",
        text: "Dynamic ARP inspection protects against:",
        options: &["ARP spoofing", "Port scanning", "SQL injection", "Phishing"],
        correct: 0,
        explanation: "DAI validates ARP packets against DHCP snooping bindings.",
    },
    QuestionSeed {
        id: "net-47",
        tag: "zero trust",
        text: "The core idea of zero trust networking is:",
        options: &[
            "Trust everything inside the firewall",
            "Disable all authentication internally",
            "Use only wired connections",
            "Never trust by network location; verify every request",
        ],
        correct: 3,
        explanation: "Access decisions rely on identity and context, not on being \"inside\".",
    },
    QuestionSeed {
        id: "net-48",
        tag: "http",
        text: "Which HTTP header tells browsers to only use HTTPS for a domain?",
        options: &[
            "Content-Type",
            "Accept-Encoding",
            "Strict-Transport-Security",
            "X-Frame-Options",
        ],
        correct: 2,
        explanation: "HSTS prevents downgrade to plain HTTP.",
    },
    QuestionSeed {
        id: "net-49",
        tag: "monitoring",
        text: "NetFlow data records:",
        options: &[
            "User passwords",
            "Only DNS queries",
            "Metadata about flows such as addresses, ports, and byte counts",
            "Full packet payloads",
        ],
        correct: 2,
        explanation: "Flow records are compact summaries useful for anomaly detection.",
    },
    QuestionSeed {
        id: "net-50",
        tag: "ipv6",
        text: "Which protocol replaces ARP in IPv6?",
        options: &["RARP", "Neighbor Discovery Protocol", "DHCPv6", "ICMPv4"],
        correct: 1,
        explanation: "NDP uses ICMPv6 messages for address resolution.",
    },
];

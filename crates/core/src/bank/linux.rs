use super::QuestionSeed;

pub(super) const QUESTIONS: &[QuestionSeed] = &[
    QuestionSeed {
        id: "linux-01",
        tag: "permissions",
        text: "What permissions does chmod 750 grant?",
        options: &[
            "Owner rw-, group r--, others none",
            "Owner rwx, group rwx, others r-x",
            "Owner r-x, group r-x, others rwx",
            "Owner rwx, group r-x, others none",
        ],
        correct: 3,
        explanation: "7 = rwx, 5 = r-x, 0 = ---.",
    },
    QuestionSeed {
        id: "linux-02",
        tag: "permissions",
        text: "What does the setuid bit on an executable do?",
        options: &[
            "Makes the file immutable",
            "Runs the program as the invoking user's group",
            "Runs the program with the file owner's privileges",
            "Prevents the file from being deleted",
        ],
        correct: 2,
        explanation: "setuid binaries execute with the owner's effective UID, often root, so they are prime targets.",
    },
    QuestionSeed {
        id: "linux-03",
        tag: "permissions",
        text: "Which command finds setuid files on the system?",
        options: &[
            "chmod -R u-s /",
            "find / -perm -4000 -type f",
            "ls -suid /",
            "grep -r setuid /etc",
        ],
        correct: 1,
        explanation: "-perm -4000 matches files with the setuid bit set.",
    },
    QuestionSeed {
        id: "linux-04",
        tag: "permissions",
        text: "The sticky bit on /tmp ensures that:",
        options: &[
            "Files persist across reboots",
            "Only a file's owner can delete or rename it",
            "Files are encrypted",
            "Directories cannot be listed",
        ],
        correct: 1,
        explanation: "In sticky directories, users cannot remove files owned by others.",
    },
    QuestionSeed {
        id: "linux-05",
        tag: "permissions",
        text: "A umask of 027 results in new files created with default mode:",
        options: &["640", "750", "664", "600"],
        correct: 0,
        explanation: "Files start at 666; masking 027 yields 640.",
    },
    QuestionSeed {
        id: "linux-06",
        tag: "users",
        text: "Which file stores hashed user passwords on modern Linux?",
        options: &["/etc/group", "/var/log/auth.log", "/etc/passwd", "/etc/shadow"],
        correct: 3,
        explanation: "/etc/shadow is readable only by root; /etc/passwd holds account metadata.",
    },
    QuestionSeed {
        id: "linux-07",
        tag: "users",
        text: "What does a UID of 0 signify?",
        options: &["A system daemon", "A guest user", "A disabled account", "The root superuser"],
        correct: 3,
        explanation: "Any account with UID 0 has full root privileges regardless of its name.",
    },
    QuestionSeed {
        id: "linux-08",
        tag: "sudo",
        text: "Which file configures sudo privileges and should be edited with visudo?",
        options: &["/etc/security/limits.conf", "/etc/profile", "/etc/sudoers", "/etc/sudo.conf"],
        correct: 2,
        explanation: "visudo validates syntax before saving, preventing lockout from a broken sudoers file.",
    },
    QuestionSeed {
        id: "linux-09",
        tag: "sudo",
        text: "Why is granting sudo access to editors like vim risky?",
        options: &[
            "Editors corrupt binary files",
            "Editors can spawn a root shell",
            "Editors consume too much memory",
            "sudo cannot run editors",
        ],
        correct: 1,
        explanation: "Many programs allow shell escapes (e.g. :!sh in vim), yielding full root access.",
    },
    QuestionSeed {
        id: "linux-10",
        tag: "logging",
        text: "On Debian-based systems, where are authentication events logged by default?",
        options: &[
            "/etc/login.defs",
            "/var/log/auth.log",
            "/var/log/kern.log",
            "/var/log/dpkg.log",
        ],
        correct: 1,
        explanation: "auth.log records sudo, SSH, and login activity.",
    },
    QuestionSeed {
        id: "linux-11",
        tag: "logging",
        text: "Which command shows logs from the systemd journal for the SSH service?",
        options: &[
            "journalctl -u ssh",
            "systemctl logs ssh",
            "dmesg --service ssh",
            "tail /var/journal/ssh",
        ],
        correct: 0,
        explanation: "journalctl -u filters the journal by unit name.",
    },
    QuestionSeed {
        id: "linux-12",
        tag: "ssh",
        text: "Which sshd_config setting disables direct root login over SSH?",
        options: &["AllowRoot false", "RootAccess disabled", "DenyUsers all", "PermitRootLogin no"],
        correct: 3,
        explanation: "Forcing admins to log in as themselves and escalate improves accountability.",
    },
    QuestionSeed {
        id: "linux-13",
        tag: "ssh",
        text: "Which setting forces key-based SSH authentication only?",
        options: &[
            "UsePAM no",
            "PubkeyAuthentication no",
            "ChallengeResponse yes",
            "PasswordAuthentication no",
        ],
        correct: 3,
        explanation: "Disabling passwords removes the brute-force attack surface.",
    },
    QuestionSeed {
        id: "linux-14",
        tag: "ssh",
        text: "What permissions should ~/.ssh/authorized_keys typically have?",
        options: &["755", "666", "600", "777"],
        correct: 2,
        explanation: "sshd refuses keys whose files are writable by others when StrictModes is enabled.",
    },
    QuestionSeed {
        id: "linux-15",
        tag: "processes",
        text: "Which command lists listening TCP sockets with the owning process?",
        options: &["top -n 1", "ss -tlnp", "ps aux", "lsblk"],
        correct: 1,
        explanation: "ss -t (TCP) -l (listening) -n (numeric) -p (process).",
    },
    QuestionSeed {
        id: "linux-16",
        tag: "processes",
        text: "What does the /proc filesystem expose?",
        options: &[
            "Package caches",
            "Kernel and process information as virtual files",
            "Compressed backups",
            "User home directories",
        ],
        correct: 1,
        explanation: "/proc is a pseudo-filesystem generated by the kernel at read time.",
    },
    QuestionSeed {
        id: "linux-17",
        tag: "processes",
        text: "Which signal cannot be caught or ignored by a process?",
        options: &["SIGKILL", "SIGINT", "SIGTERM", "SIGHUP"],
        correct: 0,
        explanation: "SIGKILL (9) always terminates the process.",
    },
    QuestionSeed {
        id: "linux-18",
        tag: "firewall",
        text: "Which tool is the modern successor to iptables in the Linux kernel?",
        options: &["ipchains", "pf", "ufw-legacy", "nftables"],
        correct: 3,
        explanation: "nftables replaces the iptables family with a single framework.",
    },
    QuestionSeed {
        id: "linux-19",
        tag: "firewall",
        text: "A default-deny inbound firewall policy means:",
        options: &[
            "All outbound traffic is blocked",
            "Only ICMP is blocked",
            "Traffic is logged but allowed",
            "All inbound traffic is blocked unless explicitly allowed",
        ],
        correct: 3,
        explanation: "Default deny minimizes exposure to services you did not intend to publish.",
    },
    QuestionSeed {
        id: "linux-20",
        tag: "firewall",
        text: "With ufw, which command allows incoming SSH?",
        options: &["ufw permit sshd", "ufw enable ssh", "ufw allow ssh", "ufw open 22/udp"],
        correct: 2,
        explanation: "ufw allow ssh opens TCP 22 using the application profile.",
    },
    QuestionSeed {
        id: "linux-21",
        tag: "hardening",
        text: "Why disable unused services?",
        options: &[
            "Because systemd requires it",
            "To reduce the attack surface",
            "To speed up the file system",
            "To free up swap",
        ],
        correct: 1,
        explanation: "Every listening service is a potential entry point.",
    },
    QuestionSeed {
        id: "linux-22",
        tag: "hardening",
        text: "Which command disables a systemd service from starting at boot?",
        options: &[
            "chkconfig --add <unit>",
            "systemctl disable <unit>",
            "systemctl mask --runtime",
            "service <unit> remove",
        ],
        correct: 1,
        explanation: "disable removes the boot-time symlinks; mask prevents starting entirely.",
    },
    QuestionSeed {
        id: "linux-23",
        tag: "hardening",
        text: "Mounting /tmp with noexec prevents:",
        options: &[
            "Executing binaries directly from /tmp",
            "Creating files in /tmp",
            "Reading files in /tmp",
            "Deleting files in /tmp",
        ],
        correct: 0,
        explanation: "noexec blocks direct execution, hindering attackers who drop payloads in /tmp.",
    },
    QuestionSeed {
        id: "linux-24",
        tag: "mac",
        text: "SELinux and AppArmor implement:",
        options: &[
            "Discretionary access control only",
            "Disk encryption",
            "Network address translation",
            "Mandatory access control",
        ],
        correct: 3,
        explanation: "MAC policies confine processes beyond standard Unix permissions.",
    },
    QuestionSeed {
        id: "linux-25",
        tag: "mac",
        text: "Which command shows the current SELinux mode?",
        options: &["aa-status", "sestatus --set", "selinux -m", "getenforce"],
        correct: 3,
        explanation: "getenforce prints Enforcing, Permissive, or Disabled.",
    },
    QuestionSeed {
        id: "linux-26",
        tag: "packages",
        text: "Why verify package signatures?",
        options: &[
            "To speed up installation",
            "To select a mirror",
            "To confirm packages come from the expected publisher unmodified",
            "To compress packages",
        ],
        correct: 2,
        explanation: "Signatures detect tampering on mirrors or in transit.",
    },
    QuestionSeed {
        id: "linux-27",
        tag: "packages",
        text: "Which command applies available package upgrades on Debian/Ubuntu?",
        options: &["apt-cache policy", "apt upgrade", "apt search", "dpkg -l"],
        correct: 1,
        explanation: "apt upgrade installs newer versions after apt update refreshes indexes.",
    },
    QuestionSeed {
        id: "linux-28",
        tag: "cron",
        text: "Why are world-writable scripts executed by root's cron dangerous?",
        options: &[
            "They cannot be logged",
            "Any user can modify them to run commands as root",
            "Cron refuses to run them",
            "They use more CPU",
        ],
        correct: 1,
        explanation: "Writable scripts run by privileged jobs are a classic privilege escalation path.",
    },
    QuestionSeed {
        id: "linux-29",
        tag: "cron",
        text: "Where are system-wide cron jobs commonly defined?",
        options: &[
            "/etc/crontab and /etc/cron.d/",
            "/var/spool/mail",
            "/etc/hosts",
            "/usr/share/cron",
        ],
        correct: 0,
        explanation: "User crontabs live under /var/spool/cron; system ones under /etc.",
    },
    QuestionSeed {
        id: "linux-30",
        tag: "privilege escalation",
        text: "An attacker finds /etc/passwd writable by all users. What can they do?",
        options: &[
            "Only read password hashes",
            "Nothing without /etc/shadow",
            "Change the hostname",
            "Add a UID 0 account and become root",
        ],
        correct: 3,
        explanation: "A new entry with UID 0 and a known password hash grants root.",
    },
    QuestionSeed {
        id: "linux-31",
        tag: "privilege escalation",
        text: "Which command lists what the current user may run with sudo?",
        options: &["sudo -k", "sudo -v", "sudo -i", "sudo -l"],
        correct: 3,
        explanation: "sudo -l is often the first enumeration step for privilege escalation.",
    },
    QuestionSeed {
        id: "linux-32",
        tag: "privilege escalation",
        text: "Linux capabilities such as CAP_NET_BIND_SERVICE allow:",
        options: &[
            "Binding multiple IPs to one interface",
            "Disabling the firewall",
            "Granting specific root powers without full root",
            "Encrypting network sockets",
        ],
        correct: 2,
        explanation: "Capabilities split root privilege into fine-grained units.",
    },
    QuestionSeed {
        id: "linux-33",
        tag: "privilege escalation",
        text: "A PATH containing \".\" before system directories risks:",
        options: &[
            "Nothing",
            "Running a malicious binary planted in the current directory",
            "Slower command lookup only",
            "Breaking shell completion",
        ],
        correct: 1,
        explanation: "A trojan named like a common command would be executed instead of the real one.",
    },
    QuestionSeed {
        id: "linux-34",
        tag: "files",
        text: "Which command makes a file immutable even to root until the flag is removed?",
        options: &["setfacl -m", "chattr +i", "chmod 000", "chown root"],
        correct: 1,
        explanation: "The immutable attribute blocks modification, deletion, and renaming.",
    },
    QuestionSeed {
        id: "linux-35",
        tag: "files",
        text: "What does the command `sha256sum file` produce?",
        options: &[
            "A cryptographic hash used to verify integrity",
            "An encrypted copy of the file",
            "A digital signature",
            "A compressed archive",
        ],
        correct: 0,
        explanation: "Comparing hashes detects modifications.",
    },
    QuestionSeed {
        id: "linux-36",
        tag: "auditing",
        text: "Which daemon records security-relevant syscalls based on rules?",
        options: &["rsyslogd", "crond", "atd", "auditd"],
        correct: 3,
        explanation: "auditd watches files and syscalls as configured with auditctl rules.",
    },
    QuestionSeed {
        id: "linux-37",
        tag: "auditing",
        text: "Which command shows recent successful logins?",
        options: &["lastb", "who -b", "uptime", "last"],
        correct: 3,
        explanation: "last reads wtmp; lastb reads failed attempts from btmp.",
    },
    QuestionSeed {
        id: "linux-38",
        tag: "auditing",
        text: "Which command shows failed login attempts?",
        options: &["id", "last", "lastb", "w"],
        correct: 2,
        explanation: "lastb reads /var/log/btmp.",
    },
    QuestionSeed {
        id: "linux-39",
        tag: "brute force",
        text: "Which tool bans IPs after repeated failed logins by parsing logs?",
        options: &["rsync", "fail2ban", "tcpdump", "nmap"],
        correct: 1,
        explanation: "fail2ban adds firewall rules for offending addresses.",
    },
    QuestionSeed {
        id: "linux-40",
        tag: "kernel",
        text: "Which sysctl setting disables IP forwarding?",
        options: &[
            "fs.protected_symlinks = 0",
            "net.ipv4.ip_forward = 0",
            "kernel.randomize_va_space = 0",
            "net.ipv4.tcp_syncookies = 0",
        ],
        correct: 1,
        explanation: "Hosts that are not routers should not forward packets.",
    },
    QuestionSeed {
        id: "linux-41",
        tag: "kernel",
        text: "kernel.randomize_va_space = 2 enables:",
        options: &["Full ASLR", "Kernel debugging", "Swap encryption", "Core dumps"],
        correct: 0,
        explanation: "Value 2 randomizes stack, mmap, VDSO, and heap.",
    },
    QuestionSeed {
        id: "linux-42",
        tag: "kernel",
        text: "net.ipv4.tcp_syncookies = 1 helps defend against:",
        options: &["ARP spoofing", "DNS poisoning", "Phishing", "SYN flood attacks"],
        correct: 3,
        explanation: "SYN cookies avoid allocating state until the handshake completes.",
    },
    QuestionSeed {
        id: "linux-43",
        tag: "encryption",
        text: "LUKS is used for:",
        options: &["Log rotation", "Package signing", "User quotas", "Full disk encryption"],
        correct: 3,
        explanation: "LUKS with dm-crypt encrypts block devices at rest.",
    },
    QuestionSeed {
        id: "linux-44",
        tag: "containers",
        text: "Running a container with --privileged:",
        options: &[
            "Disables networking",
            "Limits memory",
            "Gives it nearly full access to the host",
            "Makes it read-only",
        ],
        correct: 2,
        explanation: "Privileged containers can access devices and escape isolation easily.",
    },
    QuestionSeed {
        id: "linux-45",
        tag: "containers",
        text: "Which kernel features provide container isolation?",
        options: &["udev and dbus", "Namespaces and cgroups", "Swap and zram", "inotify and epoll"],
        correct: 1,
        explanation: "Namespaces isolate views of resources; cgroups limit their usage.",
    },
    QuestionSeed {
        id: "linux-46",
        tag: "users",
        text: "Which shell assignment prevents interactive login for a service account?",
        options: &["/usr/bin/zsh", "/usr/sbin/nologin", "/bin/bash", "/bin/sh"],
        correct: 1,
        explanation: "nologin politely refuses interactive sessions.",
    },
    QuestionSeed {
        id: "linux-47",
        tag: "users",
        text: "Which command locks a user's password?",
        options: &["passwd -l user", "userdel user", "chage -d 0 user", "usermod -G user"],
        correct: 0,
        explanation: "passwd -l prefixes the hash with ! so password login fails.",
    },
    QuestionSeed {
        id: "linux-48",
        tag: "permissions",
        text: "Which command sets an ACL giving user bob read access to a file?",
        options: &[
            "chmod bob+r file",
            "chown bob:r file",
            "getfacl -a bob file",
            "setfacl -m u:bob:r file",
        ],
        correct: 3,
        explanation: "setfacl -m modifies the access control list.",
    },
    QuestionSeed {
        id: "linux-49",
        tag: "logging",
        text: "Why forward logs to a remote server?",
        options: &[
            "Remote logs are smaller",
            "Local logging is deprecated",
            "It disables log rotation",
            "An intruder on the host cannot easily erase them",
        ],
        correct: 3,
        explanation: "Centralized logs survive local tampering and ease correlation.",
    },
    QuestionSeed {
        id: "linux-50",
        tag: "incident response",
        text: "Which command shows currently logged-in users and what they are doing?",
        options: &["free", "lscpu", "w", "df"],
        correct: 2,
        explanation: "w lists sessions, idle time, and current processes.",
    },
];
